//! Watching command implementation

use super::validators;
use super::{Command, CommandContext, print_repositories, print_users};
use crate::cli::WatchingAction;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct WatchingCommand {
    pub action: WatchingAction,
}

#[async_trait]
impl Command for WatchingCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let watching = context.github.watching();

        match &self.action {
            WatchingAction::Watchers { repo, page } => {
                validators::validate_page(page.page)?;
                let users = watching.list_watchers(repo, page.into()).await?;
                if !context.emit_json(&users)? {
                    print_users(&users);
                }
            }
            WatchingAction::Watched { user, page } => {
                validators::validate_optional_login("--user", user)?;
                validators::validate_page(page.page)?;
                let repositories = match user {
                    Some(user) => watching.list_watched_for_user(user, page.into()).await?,
                    None => {
                        watching
                            .list_watched_for_authenticated_user(page.into())
                            .await?
                    }
                };
                if !context.emit_json(&repositories)? {
                    print_repositories(&repositories);
                }
            }
            WatchingAction::Status { repo } => {
                let subscription = watching.get_subscription(repo).await?;
                if context.emit_json(&subscription)? {
                    return Ok(());
                }
                match subscription {
                    Some(subscription) if subscription.ignored => {
                        println!("{} {}", repo.to_string().bold(), "ignored".yellow());
                    }
                    Some(_) => println!("{} {}", repo.to_string().bold(), "watching".green()),
                    None => println!("{} {}", repo.to_string().bold(), "not watching".dimmed()),
                }
            }
            WatchingAction::Watch { repo, ignore } => {
                let subscription = watching.set_subscription(repo, !ignore, *ignore).await?;
                if context.emit_json(&subscription)? {
                    return Ok(());
                }
                let state = if subscription.ignored {
                    "Ignoring"
                } else {
                    "Watching"
                };
                println!("{} {} {}", "✓".green(), state, repo);
            }
            WatchingAction::Unwatch { repo } => {
                let ok = watching.delete_subscription(repo).await?;
                context.report(
                    ok,
                    &format!("Stopped watching {}", repo),
                    &format!("Could not stop watching {}", repo),
                )?;
            }
        }
        Ok(())
    }
}
