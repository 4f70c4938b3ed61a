//! Deployment environments API

use super::{NO_CONTENT, repo_path};
use crate::types::{Environment, EnvironmentList, EnvironmentRequest};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, ListOptions, RepoSlug};

pub struct EnvironmentsManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> EnvironmentsManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn list_environments(
        &self,
        repo: impl Into<RepoSlug>,
        options: ListOptions,
    ) -> Result<EnvironmentList> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["environments"])).list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn get_environment(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
    ) -> Result<Environment> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["environments", name.as_ref()]));
        self.client.send_json(&endpoint).await
    }

    /// Create an environment, or update the protection settings of an existing one
    ///
    /// Fields left unset in `request` are not sent. The request is checked
    /// locally against GitHub's limits before anything goes over the wire.
    pub async fn create_or_update_environment(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
        request: &EnvironmentRequest,
    ) -> Result<Environment> {
        request.validate()?;
        let repo = repo.into();
        let endpoint =
            Endpoint::put(repo_path(&repo, &["environments", name.as_ref()])).json(request)?;
        self.client.send_json(&endpoint).await
    }

    pub async fn delete_environment(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
    ) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::delete(repo_path(&repo, &["environments", name.as_ref()]));
        self.client.send_status(&endpoint, NO_CONTENT).await
    }
}
