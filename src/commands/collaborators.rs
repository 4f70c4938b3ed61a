//! Collaborators command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::cli::CollaboratorsAction;
use crate::types::CollaboratorFilter;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct CollaboratorsCommand {
    pub action: CollaboratorsAction,
}

#[async_trait]
impl Command for CollaboratorsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let collaborators = context.github.collaborators();

        match &self.action {
            CollaboratorsAction::List {
                repo,
                affiliation,
                permission,
                page,
            } => {
                validators::validate_page(page.page)?;
                let filter = CollaboratorFilter {
                    affiliation: *affiliation,
                    permission: permission.clone(),
                };
                let list = collaborators
                    .list_collaborators(repo, &filter, page.into())
                    .await?;
                if context.emit_json(&list)? {
                    return Ok(());
                }
                if list.is_empty() {
                    println!("{}", "No collaborators found".yellow());
                    return Ok(());
                }
                for collaborator in &list {
                    let role = collaborator.role_name.as_deref().unwrap_or("-");
                    println!(
                        "{} {}  {}",
                        "•".blue(),
                        collaborator.user.login.bold(),
                        role.cyan()
                    );
                }
                println!();
                println!(
                    "{}",
                    format!("Total: {} collaborators", list.len()).green()
                );
            }
            CollaboratorsAction::Check { repo, username } => {
                validators::validate_login("username", username)?;
                let is_collaborator = collaborators.is_collaborator(repo, username).await?;
                if context.emit_json(&serde_json::json!({ "collaborator": is_collaborator }))? {
                    return Ok(());
                }
                if is_collaborator {
                    println!("{} is a collaborator on {}", username.bold(), repo);
                } else {
                    println!("{} is not a collaborator on {}", username.bold(), repo);
                }
            }
            CollaboratorsAction::Add {
                repo,
                username,
                permission,
            } => {
                validators::validate_login("username", username)?;
                let invitation = collaborators
                    .add_collaborator(repo, username, permission.as_ref())
                    .await?;
                if context.emit_json(&invitation)? {
                    return Ok(());
                }
                match invitation {
                    Some(invitation) => println!(
                        "{} Invited {} to {} ({})",
                        "✓".green(),
                        username.bold(),
                        repo,
                        invitation.html_url
                    ),
                    None => println!(
                        "{} Updated permission for {} on {}",
                        "✓".green(),
                        username.bold(),
                        repo
                    ),
                }
            }
            CollaboratorsAction::Remove { repo, username } => {
                validators::validate_login("username", username)?;
                let ok = collaborators.remove_collaborator(repo, username).await?;
                context.report(
                    ok,
                    &format!("Removed {} from {}", username, repo),
                    &format!("Could not remove {} from {}", username, repo),
                )?;
            }
            CollaboratorsAction::Permission { repo, username } => {
                validators::validate_login("username", username)?;
                let permission = collaborators.get_permission(repo, username).await?;
                if context.emit_json(&permission)? {
                    return Ok(());
                }
                let role = permission
                    .role_name
                    .as_deref()
                    .unwrap_or(permission.permission.as_str());
                println!(
                    "{} has {} permission on {} (role: {})",
                    username.bold(),
                    permission.permission.cyan(),
                    repo,
                    role
                );
            }
        }
        Ok(())
    }
}
