//! Watching API (repository notification subscriptions)

use super::{NO_CONTENT, repo_path};
use crate::types::{Repository, RepositorySubscription, SimpleUser, SubscriptionRequest};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, ListOptions, RepoSlug};

pub struct WatchingManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> WatchingManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Users watching a repository
    pub async fn list_watchers(
        &self,
        repo: impl Into<RepoSlug>,
        options: ListOptions,
    ) -> Result<Vec<SimpleUser>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["subscribers"])).list(options);
        self.client.send_json(&endpoint).await
    }

    /// Repositories the authenticated user watches
    pub async fn list_watched_for_authenticated_user(
        &self,
        options: ListOptions,
    ) -> Result<Vec<Repository>> {
        let endpoint = Endpoint::get(["user", "subscriptions"]).list(options);
        self.client.send_json(&endpoint).await
    }

    /// Repositories a given user watches
    pub async fn list_watched_for_user(
        &self,
        username: &str,
        options: ListOptions,
    ) -> Result<Vec<Repository>> {
        let endpoint = Endpoint::get(["users", username, "subscriptions"]).list(options);
        self.client.send_json(&endpoint).await
    }

    /// The authenticated user's subscription to a repository
    ///
    /// Returns `None` when the user is not watching it.
    pub async fn get_subscription(
        &self,
        repo: impl Into<RepoSlug>,
    ) -> Result<Option<RepositorySubscription>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["subscription"]));
        self.client.send_optional(&endpoint).await
    }

    /// Watch (`subscribed`) or mute (`ignored`) a repository
    pub async fn set_subscription(
        &self,
        repo: impl Into<RepoSlug>,
        subscribed: bool,
        ignored: bool,
    ) -> Result<RepositorySubscription> {
        let repo = repo.into();
        let endpoint = Endpoint::put(repo_path(&repo, &["subscription"]))
            .json(&SubscriptionRequest { subscribed, ignored })?;
        self.client.send_json(&endpoint).await
    }

    /// Stop watching a repository
    pub async fn delete_subscription(&self, repo: impl Into<RepoSlug>) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::delete(repo_path(&repo, &["subscription"]));
        self.client.send_status(&endpoint, NO_CONTENT).await
    }
}
