//! Starring API

use super::{NO_CONTENT, repo_path};
use crate::types::{Repository, SimpleUser};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, ListOptions, RepoSlug};

pub struct StarringManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> StarringManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    fn starred_endpoint(method: gh_rest::Method, repo: &RepoSlug) -> Endpoint {
        Endpoint::new(
            method,
            ["user", "starred", repo.owner.as_str(), repo.name.as_str()],
        )
    }

    pub async fn list_stargazers(
        &self,
        repo: impl Into<RepoSlug>,
        options: ListOptions,
    ) -> Result<Vec<SimpleUser>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["stargazers"])).list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn list_starred_for_authenticated_user(
        &self,
        options: ListOptions,
    ) -> Result<Vec<Repository>> {
        let endpoint = Endpoint::get(["user", "starred"]).list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn list_starred_for_user(
        &self,
        username: &str,
        options: ListOptions,
    ) -> Result<Vec<Repository>> {
        let endpoint = Endpoint::get(["users", username, "starred"]).list(options);
        self.client.send_json(&endpoint).await
    }

    /// Whether the authenticated user has starred the repository (204) or not (404)
    pub async fn is_starred(&self, repo: impl Into<RepoSlug>) -> Result<bool> {
        let endpoint = Self::starred_endpoint(gh_rest::Method::GET, &repo.into());
        self.client.send_check(&endpoint).await
    }

    pub async fn star(&self, repo: impl Into<RepoSlug>) -> Result<bool> {
        let endpoint = Self::starred_endpoint(gh_rest::Method::PUT, &repo.into());
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    pub async fn unstar(&self, repo: impl Into<RepoSlug>) -> Result<bool> {
        let endpoint = Self::starred_endpoint(gh_rest::Method::DELETE, &repo.into());
        self.client.send_status(&endpoint, NO_CONTENT).await
    }
}
