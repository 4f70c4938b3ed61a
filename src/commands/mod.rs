//! Command implementations behind the `ghm` subcommands

pub mod base;
pub mod billing;
pub mod collaborators;
pub mod completions;
pub mod emojis;
pub mod environments;
pub mod gitignore;
pub mod secrets;
pub mod snapshot;
pub mod stars;
pub mod validators;
pub mod watching;

pub use base::{Command, CommandContext};
pub use billing::BillingCommand;
pub use collaborators::CollaboratorsCommand;
pub use completions::write_completions;
pub use emojis::EmojisCommand;
pub use environments::EnvironmentsCommand;
pub use gitignore::GitignoreCommand;
pub use secrets::SecretsCommand;
pub use snapshot::SnapshotCommand;
pub use stars::StarsCommand;
pub use watching::WatchingCommand;

use crate::types::{Repository, SimpleUser};
use colored::*;

pub(crate) fn print_users(users: &[SimpleUser]) {
    if users.is_empty() {
        println!("{}", "No users found".yellow());
        return;
    }
    for user in users {
        println!("{} {}", "•".blue(), user.login.bold());
    }
    println!();
    println!("{}", format!("Total: {} users", users.len()).green());
}

pub(crate) fn print_repositories(repositories: &[Repository]) {
    if repositories.is_empty() {
        println!("{}", "No repositories found".yellow());
        return;
    }
    for repo in repositories {
        let visibility = if repo.private { " (private)" } else { "" };
        println!("{} {}{}", "•".blue(), repo.full_name.bold(), visibility.dimmed());
        if let Some(description) = &repo.description {
            println!("  {}", description);
        }
    }
    println!();
    println!(
        "{}",
        format!("Total: {} repositories", repositories.len()).green()
    );
}
