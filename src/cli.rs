//! Command-line interface definition for `ghm`

use crate::constants;
use crate::types::{Affiliation, BillingAccount, Permission, SecretVisibility};
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use gh_rest::{ListOptions, RepoSlug};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghm")]
#[command(about = "Thin command-line access to GitHub REST resource managers")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    pub config: String,

    /// GitHub token (overrides the config file and GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List emojis available in GitHub markdown
    Emojis,

    /// Manage GitHub Actions secrets
    #[command(subcommand)]
    Secrets(SecretsAction),

    /// Show billing usage for an organization or user
    #[command(subcommand)]
    Billing(BillingAction),

    /// Watch, unwatch and list repository watchers
    #[command(subcommand)]
    Watching(WatchingAction),

    /// Manage repository collaborators
    #[command(subcommand)]
    Collaborators(CollaboratorsAction),

    /// Manage deployment environments
    #[command(subcommand)]
    Environments(EnvironmentsAction),

    /// Submit dependency graph snapshots
    #[command(subcommand)]
    Snapshot(SnapshotAction),

    /// Star, unstar and list stargazers
    #[command(subcommand)]
    Stars(StarsAction),

    /// Browse gitignore templates
    #[command(subcommand)]
    Gitignore(GitignoreAction),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Pagination flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Results per page (max 100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Page number to fetch
    #[arg(long)]
    pub page: Option<u32>,
}

impl From<&PageArgs> for ListOptions {
    fn from(args: &PageArgs) -> Self {
        ListOptions {
            per_page: args.per_page,
            page: args.page,
        }
    }
}

/// Where a secret lives: a repository, an organization, or a repository environment
#[derive(Args, Debug, Clone)]
pub struct SecretScopeArgs {
    /// Repository (owner/name or GitHub URL)
    #[arg(long, conflicts_with = "org")]
    pub repo: Option<RepoSlug>,

    /// Organization login
    #[arg(long)]
    pub org: Option<String>,

    /// Environment name (requires --repo)
    #[arg(long = "env", requires = "repo")]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretScope {
    Repo(RepoSlug),
    Org(String),
    Environment(RepoSlug, String),
}

impl SecretScopeArgs {
    pub fn scope(&self) -> Result<SecretScope> {
        match (&self.repo, &self.org, &self.environment) {
            (Some(repo), None, Some(env)) => Ok(SecretScope::Environment(repo.clone(), env.clone())),
            (Some(repo), None, None) => Ok(SecretScope::Repo(repo.clone())),
            (None, Some(org), None) => Ok(SecretScope::Org(org.clone())),
            _ => Err(anyhow!("Specify exactly one of --repo or --org")),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SecretsAction {
    /// Show the public key used to encrypt secret values
    PublicKey {
        #[command(flatten)]
        scope: SecretScopeArgs,
    },

    /// List secret names
    List {
        #[command(flatten)]
        scope: SecretScopeArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a secret's metadata
    Get {
        /// Secret name
        name: String,

        #[command(flatten)]
        scope: SecretScopeArgs,
    },

    /// Create or update a secret from an already-encrypted value
    Set {
        /// Secret name
        name: String,

        /// Base64 value sealed with the scope's public key
        #[arg(long)]
        encrypted_value: String,

        /// Id of the public key used to seal the value
        #[arg(long)]
        key_id: String,

        /// Visibility for organization secrets (all, private, selected) [default: private]
        #[arg(long)]
        visibility: Option<SecretVisibility>,

        /// Repository ids for organization secrets with selected visibility
        #[arg(long = "repository-id")]
        repository_ids: Vec<u64>,

        #[command(flatten)]
        scope: SecretScopeArgs,
    },

    /// Delete a secret
    Delete {
        /// Secret name
        name: String,

        #[command(flatten)]
        scope: SecretScopeArgs,
    },

    /// List organization secrets shared with a repository
    Shared {
        /// Repository (owner/name or GitHub URL)
        repo: RepoSlug,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List repositories that can read a selected-visibility organization secret
    Repos {
        /// Secret name
        name: String,

        /// Organization login
        #[arg(long)]
        org: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Replace the repositories that can read an organization secret
    SetRepos {
        /// Secret name
        name: String,

        /// Organization login
        #[arg(long)]
        org: String,

        /// Repository ids
        #[arg(required = true)]
        repository_ids: Vec<u64>,
    },

    /// Grant one repository access to an organization secret
    AddRepo {
        /// Secret name
        name: String,

        /// Organization login
        #[arg(long)]
        org: String,

        /// Repository id
        repository_id: u64,
    },

    /// Revoke one repository's access to an organization secret
    RemoveRepo {
        /// Secret name
        name: String,

        /// Organization login
        #[arg(long)]
        org: String,

        /// Repository id
        repository_id: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AccountArgs {
    /// Organization login
    #[arg(long, conflicts_with = "user", required_unless_present = "user")]
    pub org: Option<String>,

    /// User login
    #[arg(long)]
    pub user: Option<String>,
}

impl AccountArgs {
    pub fn account(&self) -> Result<BillingAccount> {
        match (&self.org, &self.user) {
            (Some(org), None) => Ok(BillingAccount::Org(org.clone())),
            (None, Some(user)) => Ok(BillingAccount::User(user.clone())),
            _ => Err(anyhow!("Specify exactly one of --org or --user")),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum BillingAction {
    /// GitHub Actions minutes
    Actions(AccountArgs),
    /// GitHub Packages bandwidth
    Packages(AccountArgs),
    /// Shared storage estimate
    Storage(AccountArgs),
}

#[derive(Subcommand, Debug)]
pub enum WatchingAction {
    /// List users watching a repository
    Watchers {
        repo: RepoSlug,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List watched repositories (yours, or another user's)
    Watched {
        /// User login; defaults to the authenticated user
        #[arg(long)]
        user: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show your subscription to a repository
    Status { repo: RepoSlug },

    /// Watch a repository
    Watch {
        repo: RepoSlug,

        /// Mute all notifications instead of subscribing
        #[arg(long)]
        ignore: bool,
    },

    /// Stop watching a repository
    Unwatch { repo: RepoSlug },
}

#[derive(Subcommand, Debug)]
pub enum CollaboratorsAction {
    /// List collaborators
    List {
        repo: RepoSlug,

        /// Filter by affiliation (outside, direct, all)
        #[arg(long)]
        affiliation: Option<Affiliation>,

        /// Filter by permission (pull, triage, push, maintain, admin)
        #[arg(long)]
        permission: Option<Permission>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Check whether a user is a collaborator
    Check { repo: RepoSlug, username: String },

    /// Invite a user or update their permission
    Add {
        repo: RepoSlug,
        username: String,

        /// Role to grant (pull, triage, push, maintain, admin or a custom role)
        #[arg(long)]
        permission: Option<Permission>,
    },

    /// Remove a collaborator
    Remove { repo: RepoSlug, username: String },

    /// Show a user's permission level
    Permission { repo: RepoSlug, username: String },
}

#[derive(Subcommand, Debug)]
pub enum EnvironmentsAction {
    /// List environments
    List {
        repo: RepoSlug,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one environment
    Get { repo: RepoSlug, name: String },

    /// Create or update an environment
    Put {
        repo: RepoSlug,
        name: String,

        /// Minutes to wait before a deployment may proceed
        #[arg(long)]
        wait_timer: Option<u32>,

        /// Forbid the deployment's author from approving it
        #[arg(long)]
        prevent_self_review: Option<bool>,

        /// User ids required to review deployments
        #[arg(long = "reviewer-user")]
        reviewer_users: Vec<u64>,

        /// Team ids required to review deployments
        #[arg(long = "reviewer-team")]
        reviewer_teams: Vec<u64>,

        /// Only protected branches may deploy
        #[arg(long, conflicts_with = "custom_branch_policies")]
        protected_branches: bool,

        /// Only branches matching custom policies may deploy
        #[arg(long)]
        custom_branch_policies: bool,
    },

    /// Delete an environment
    Delete { repo: RepoSlug, name: String },
}

#[derive(Subcommand, Debug)]
pub enum SnapshotAction {
    /// Submit a snapshot read from a JSON file
    Submit {
        repo: RepoSlug,

        /// Snapshot JSON in the dependency submission format
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum StarsAction {
    /// List users who starred a repository
    Stargazers {
        repo: RepoSlug,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List starred repositories (yours, or another user's)
    Starred {
        /// User login; defaults to the authenticated user
        #[arg(long)]
        user: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Check whether you starred a repository
    Check { repo: RepoSlug },

    /// Star a repository
    Star { repo: RepoSlug },

    /// Remove your star from a repository
    Unstar { repo: RepoSlug },
}

#[derive(Subcommand, Debug)]
pub enum GitignoreAction {
    /// List template names
    List,

    /// Show a template
    Get {
        name: String,

        /// Print only the template source
        #[arg(long)]
        raw: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_secret_scope_resolution() {
        let repo = RepoSlug::new("o", "r");
        let args = SecretScopeArgs {
            repo: Some(repo.clone()),
            org: None,
            environment: Some("prod".to_string()),
        };
        assert_eq!(
            args.scope().unwrap(),
            SecretScope::Environment(repo.clone(), "prod".to_string())
        );

        let none = SecretScopeArgs {
            repo: None,
            org: None,
            environment: None,
        };
        assert!(none.scope().is_err());
    }

    #[test]
    fn test_page_args_into_list_options() {
        let options: ListOptions = (&PageArgs {
            per_page: Some(50),
            page: None,
        })
            .into();
        assert_eq!(options, ListOptions::new().per_page(50));
    }
}
