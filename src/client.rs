//! Facade handing out resource managers
//!
//! ```rust,no_run
//! use gh_managers::GitHub;
//! use gh_managers::gh_rest::ListOptions;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let github = GitHub::new(Some("your_token".to_string()));
//!
//! let emojis = github.emojis().get_emojis().await?;
//! println!("{} emojis", emojis.len());
//!
//! let secrets = github
//!     .secrets()
//!     .list_repo_secrets(("octocat", "Hello-World"), ListOptions::default())
//!     .await?;
//! println!("{} secrets", secrets.total_count);
//! # Ok(())
//! # }
//! ```

use crate::managers::{
    BillingManager, CollaboratorsManager, DependencySubmissionManager, EmojisManager,
    EnvironmentsManager, GitignoreManager, SecretsManager, StarringManager, WatchingManager,
};
use gh_rest::GitHubClient;

/// Entry point owning the shared [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct GitHub {
    client: GitHubClient,
}

impl GitHub {
    /// Client for api.github.com; without a token `GITHUB_TOKEN` is used if set
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: GitHubClient::new(token),
        }
    }

    pub fn from_client(client: GitHubClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub fn secrets(&self) -> SecretsManager<'_> {
        SecretsManager::new(&self.client)
    }

    pub fn billing(&self) -> BillingManager<'_> {
        BillingManager::new(&self.client)
    }

    pub fn watching(&self) -> WatchingManager<'_> {
        WatchingManager::new(&self.client)
    }

    pub fn collaborators(&self) -> CollaboratorsManager<'_> {
        CollaboratorsManager::new(&self.client)
    }

    pub fn environments(&self) -> EnvironmentsManager<'_> {
        EnvironmentsManager::new(&self.client)
    }

    pub fn emojis(&self) -> EmojisManager<'_> {
        EmojisManager::new(&self.client)
    }

    pub fn dependency_submission(&self) -> DependencySubmissionManager<'_> {
        DependencySubmissionManager::new(&self.client)
    }

    pub fn starring(&self) -> StarringManager<'_> {
        StarringManager::new(&self.client)
    }

    pub fn gitignore(&self) -> GitignoreManager<'_> {
        GitignoreManager::new(&self.client)
    }
}

impl From<GitHubClient> for GitHub {
    fn from(client: GitHubClient) -> Self {
        Self::from_client(client)
    }
}
