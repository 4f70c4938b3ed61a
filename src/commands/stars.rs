//! Stars command implementation

use super::validators;
use super::{Command, CommandContext, print_repositories, print_users};
use crate::cli::StarsAction;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct StarsCommand {
    pub action: StarsAction,
}

#[async_trait]
impl Command for StarsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let starring = context.github.starring();

        match &self.action {
            StarsAction::Stargazers { repo, page } => {
                validators::validate_page(page.page)?;
                let users = starring.list_stargazers(repo, page.into()).await?;
                if !context.emit_json(&users)? {
                    print_users(&users);
                }
            }
            StarsAction::Starred { user, page } => {
                validators::validate_optional_login("--user", user)?;
                validators::validate_page(page.page)?;
                let repositories = match user {
                    Some(user) => starring.list_starred_for_user(user, page.into()).await?,
                    None => {
                        starring
                            .list_starred_for_authenticated_user(page.into())
                            .await?
                    }
                };
                if !context.emit_json(&repositories)? {
                    print_repositories(&repositories);
                }
            }
            StarsAction::Check { repo } => {
                let starred = starring.is_starred(repo).await?;
                if context.emit_json(&serde_json::json!({ "starred": starred }))? {
                    return Ok(());
                }
                if starred {
                    println!("{} {}", repo.to_string().bold(), "starred".green());
                } else {
                    println!("{} {}", repo.to_string().bold(), "not starred".dimmed());
                }
            }
            StarsAction::Star { repo } => {
                let ok = starring.star(repo).await?;
                context.report(
                    ok,
                    &format!("Starred {}", repo),
                    &format!("Could not star {}", repo),
                )?;
            }
            StarsAction::Unstar { repo } => {
                let ok = starring.unstar(repo).await?;
                context.report(
                    ok,
                    &format!("Unstarred {}", repo),
                    &format!("Could not unstar {}", repo),
                )?;
            }
        }
        Ok(())
    }
}
