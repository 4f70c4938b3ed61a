//! Repository collaborators API

use super::{NO_CONTENT, repo_path};
use crate::types::{
    Collaborator, CollaboratorFilter, CollaboratorPermission, Permission, RepositoryInvitation,
};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, ListOptions, RepoSlug};
use serde::Serialize;

#[derive(Serialize)]
struct AddCollaboratorBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    permission: Option<&'a Permission>,
}

pub struct CollaboratorsManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> CollaboratorsManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn list_collaborators(
        &self,
        repo: impl Into<RepoSlug>,
        filter: &CollaboratorFilter,
        options: ListOptions,
    ) -> Result<Vec<Collaborator>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["collaborators"]))
            .query_opt("affiliation", filter.affiliation)
            .query_opt("permission", filter.permission.as_ref())
            .list(options);
        self.client.send_json(&endpoint).await
    }

    /// Whether `username` is a collaborator (204) rather than not (404)
    pub async fn is_collaborator(&self, repo: impl Into<RepoSlug>, username: &str) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["collaborators", username]));
        self.client.send_check(&endpoint).await
    }

    /// Invite a user to collaborate
    ///
    /// Returns the new invitation, or `None` when the user already had access
    /// and GitHub only updated their permission.
    pub async fn add_collaborator(
        &self,
        repo: impl Into<RepoSlug>,
        username: &str,
        permission: Option<&Permission>,
    ) -> Result<Option<RepositoryInvitation>> {
        let repo = repo.into();
        let endpoint = Endpoint::put(repo_path(&repo, &["collaborators", username]))
            .json(&AddCollaboratorBody { permission })?;
        self.client.send_created(&endpoint).await
    }

    pub async fn remove_collaborator(
        &self,
        repo: impl Into<RepoSlug>,
        username: &str,
    ) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::delete(repo_path(&repo, &["collaborators", username]));
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    pub async fn get_permission(
        &self,
        repo: impl Into<RepoSlug>,
        username: &str,
    ) -> Result<CollaboratorPermission> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["collaborators", username, "permission"]));
        self.client.send_json(&endpoint).await
    }
}
