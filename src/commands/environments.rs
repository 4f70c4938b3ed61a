//! Environments command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::cli::EnvironmentsAction;
use crate::types::{
    DeploymentBranchPolicy, Environment, EnvironmentRequest, ProtectionRule, ReviewerType,
};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct EnvironmentsCommand {
    pub action: EnvironmentsAction,
}

fn print_environment(environment: &Environment) {
    println!("{} {}", "•".blue(), environment.name.bold());
    for rule in &environment.protection_rules {
        match rule {
            ProtectionRule::WaitTimer { wait_timer, .. } => {
                println!("  Wait timer: {} minutes", wait_timer);
            }
            ProtectionRule::RequiredReviewers { reviewers, .. } => {
                let names: Vec<&str> = reviewers
                    .iter()
                    .map(|reviewer| reviewer.reviewer.display_name())
                    .collect();
                println!("  Required reviewers: {}", names.join(", ").cyan());
            }
            ProtectionRule::BranchPolicy { .. } => println!("  Branch policy enforced"),
            ProtectionRule::Unknown => {}
        }
    }
    if let Some(policy) = &environment.deployment_branch_policy {
        let kind = if policy.protected_branches {
            "protected branches"
        } else {
            "custom branch policies"
        };
        println!("  Deploys from: {}", kind);
    }
}

#[async_trait]
impl Command for EnvironmentsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let environments = context.github.environments();

        match &self.action {
            EnvironmentsAction::List { repo, page } => {
                validators::validate_page(page.page)?;
                let list = environments.list_environments(repo, page.into()).await?;
                if context.emit_json(&list)? {
                    return Ok(());
                }
                if list.environments.is_empty() {
                    println!("{}", "No environments found".yellow());
                    return Ok(());
                }
                for environment in &list.environments {
                    print_environment(environment);
                }
                println!();
                println!(
                    "{}",
                    format!("Total: {} environments", list.total_count).green()
                );
            }
            EnvironmentsAction::Get { repo, name } => {
                validators::validate_name("environment", name)?;
                let environment = environments.get_environment(repo, name).await?;
                if !context.emit_json(&environment)? {
                    print_environment(&environment);
                }
            }
            EnvironmentsAction::Put {
                repo,
                name,
                wait_timer,
                prevent_self_review,
                reviewer_users,
                reviewer_teams,
                protected_branches,
                custom_branch_policies,
            } => {
                validators::validate_name("environment", name)?;
                let mut request = EnvironmentRequest::new();
                if let Some(minutes) = wait_timer {
                    request = request.wait_timer(*minutes);
                }
                if let Some(prevent) = prevent_self_review {
                    request = request.prevent_self_review(*prevent);
                }
                for id in reviewer_users {
                    request = request.reviewer(ReviewerType::User, *id);
                }
                for id in reviewer_teams {
                    request = request.reviewer(ReviewerType::Team, *id);
                }
                if *protected_branches || *custom_branch_policies {
                    request = request.deployment_branch_policy(DeploymentBranchPolicy {
                        protected_branches: *protected_branches,
                        custom_branch_policies: *custom_branch_policies,
                    });
                }

                let environment = environments
                    .create_or_update_environment(repo, name, &request)
                    .await?;
                if context.emit_json(&environment)? {
                    return Ok(());
                }
                println!("{} Saved environment {}", "✓".green(), name.bold());
                print_environment(&environment);
            }
            EnvironmentsAction::Delete { repo, name } => {
                validators::validate_name("environment", name)?;
                let ok = environments.delete_environment(repo, name).await?;
                context.report(
                    ok,
                    &format!("Deleted environment {} from {}", name, repo),
                    &format!("Could not delete environment {} from {}", name, repo),
                )?;
            }
        }
        Ok(())
    }
}
