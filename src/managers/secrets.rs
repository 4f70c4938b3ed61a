//! GitHub Actions secrets API
//!
//! Covers repository, organization and environment secrets. Values must be
//! sealed with libsodium against the target's public key before upload; the
//! manager only transports the already-encrypted value.

use super::{CREATED_OR_UPDATED, NO_CONTENT, repo_path};
use crate::types::secrets::validate_secret_name;
use crate::types::{
    EncryptedSecret, OrgSecret, OrgSecretRequest, PublicKey, Secret, SecretList,
    SelectedRepositories,
};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, ListOptions, RepoSlug};
use serde::Serialize;

#[derive(Serialize)]
struct SelectedRepositoryIds<'a> {
    selected_repository_ids: &'a [u64],
}

pub struct SecretsManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> SecretsManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    // Repository secrets

    pub async fn repo_public_key(&self, repo: impl Into<RepoSlug>) -> Result<PublicKey> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["actions", "secrets", "public-key"]));
        self.client.send_json(&endpoint).await
    }

    pub async fn list_repo_secrets(
        &self,
        repo: impl Into<RepoSlug>,
        options: ListOptions,
    ) -> Result<SecretList<Secret>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["actions", "secrets"])).list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn get_repo_secret(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
    ) -> Result<Secret> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(&repo, &["actions", "secrets", name.as_ref()]));
        self.client.send_json(&endpoint).await
    }

    /// Create or update a repository secret
    ///
    /// Returns `true` when GitHub reports the secret as created (201) or updated (204).
    pub async fn put_repo_secret(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
        secret: &EncryptedSecret,
    ) -> Result<bool> {
        let name = name.as_ref();
        validate_secret_name(name)?;
        let repo = repo.into();
        let endpoint = Endpoint::put(repo_path(&repo, &["actions", "secrets", name])).json(secret)?;
        self.client.send_status(&endpoint, CREATED_OR_UPDATED).await
    }

    pub async fn delete_repo_secret(
        &self,
        repo: impl Into<RepoSlug>,
        name: impl AsRef<str>,
    ) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::delete(repo_path(&repo, &["actions", "secrets", name.as_ref()]));
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    /// Organization secrets shared with this repository
    pub async fn list_repo_organization_secrets(
        &self,
        repo: impl Into<RepoSlug>,
        options: ListOptions,
    ) -> Result<SecretList<Secret>> {
        let repo = repo.into();
        let endpoint =
            Endpoint::get(repo_path(&repo, &["actions", "organization-secrets"])).list(options);
        self.client.send_json(&endpoint).await
    }

    // Organization secrets

    pub async fn org_public_key(&self, org: &str) -> Result<PublicKey> {
        let endpoint = Endpoint::get(["orgs", org, "actions", "secrets", "public-key"]);
        self.client.send_json(&endpoint).await
    }

    pub async fn list_org_secrets(
        &self,
        org: &str,
        options: ListOptions,
    ) -> Result<SecretList<OrgSecret>> {
        let endpoint = Endpoint::get(["orgs", org, "actions", "secrets"]).list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn get_org_secret(&self, org: &str, name: impl AsRef<str>) -> Result<OrgSecret> {
        let endpoint = Endpoint::get(["orgs", org, "actions", "secrets", name.as_ref()]);
        self.client.send_json(&endpoint).await
    }

    pub async fn put_org_secret(
        &self,
        org: &str,
        name: impl AsRef<str>,
        request: &OrgSecretRequest,
    ) -> Result<bool> {
        let name = name.as_ref();
        validate_secret_name(name)?;
        let endpoint = Endpoint::put(["orgs", org, "actions", "secrets", name]).json(request)?;
        self.client.send_status(&endpoint, CREATED_OR_UPDATED).await
    }

    pub async fn delete_org_secret(&self, org: &str, name: impl AsRef<str>) -> Result<bool> {
        let endpoint = Endpoint::delete(["orgs", org, "actions", "secrets", name.as_ref()]);
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    /// Repositories that can read a `selected`-visibility organization secret
    pub async fn list_selected_repos_for_org_secret(
        &self,
        org: &str,
        name: impl AsRef<str>,
        options: ListOptions,
    ) -> Result<SelectedRepositories> {
        let endpoint = Endpoint::get([
            "orgs",
            org,
            "actions",
            "secrets",
            name.as_ref(),
            "repositories",
        ])
        .list(options);
        self.client.send_json(&endpoint).await
    }

    /// Replace the full list of repositories that can read an organization secret
    pub async fn set_selected_repos_for_org_secret(
        &self,
        org: &str,
        name: impl AsRef<str>,
        repository_ids: &[u64],
    ) -> Result<bool> {
        let endpoint = Endpoint::put([
            "orgs",
            org,
            "actions",
            "secrets",
            name.as_ref(),
            "repositories",
        ])
        .json(&SelectedRepositoryIds {
            selected_repository_ids: repository_ids,
        })?;
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    pub async fn add_selected_repo_to_org_secret(
        &self,
        org: &str,
        name: impl AsRef<str>,
        repository_id: u64,
    ) -> Result<bool> {
        let id = repository_id.to_string();
        let endpoint = Endpoint::put([
            "orgs",
            org,
            "actions",
            "secrets",
            name.as_ref(),
            "repositories",
            id.as_str(),
        ]);
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    pub async fn remove_selected_repo_from_org_secret(
        &self,
        org: &str,
        name: impl AsRef<str>,
        repository_id: u64,
    ) -> Result<bool> {
        let id = repository_id.to_string();
        let endpoint = Endpoint::delete([
            "orgs",
            org,
            "actions",
            "secrets",
            name.as_ref(),
            "repositories",
            id.as_str(),
        ]);
        self.client.send_status(&endpoint, NO_CONTENT).await
    }

    // Environment secrets

    pub async fn environment_public_key(
        &self,
        repo: impl Into<RepoSlug>,
        environment: impl AsRef<str>,
    ) -> Result<PublicKey> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(
            &repo,
            &["environments", environment.as_ref(), "secrets", "public-key"],
        ));
        self.client.send_json(&endpoint).await
    }

    pub async fn list_environment_secrets(
        &self,
        repo: impl Into<RepoSlug>,
        environment: impl AsRef<str>,
        options: ListOptions,
    ) -> Result<SecretList<Secret>> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(
            &repo,
            &["environments", environment.as_ref(), "secrets"],
        ))
        .list(options);
        self.client.send_json(&endpoint).await
    }

    pub async fn get_environment_secret(
        &self,
        repo: impl Into<RepoSlug>,
        environment: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Result<Secret> {
        let repo = repo.into();
        let endpoint = Endpoint::get(repo_path(
            &repo,
            &["environments", environment.as_ref(), "secrets", name.as_ref()],
        ));
        self.client.send_json(&endpoint).await
    }

    pub async fn put_environment_secret(
        &self,
        repo: impl Into<RepoSlug>,
        environment: impl AsRef<str>,
        name: impl AsRef<str>,
        secret: &EncryptedSecret,
    ) -> Result<bool> {
        let name = name.as_ref();
        validate_secret_name(name)?;
        let repo = repo.into();
        let endpoint = Endpoint::put(repo_path(
            &repo,
            &["environments", environment.as_ref(), "secrets", name],
        ))
        .json(secret)?;
        self.client.send_status(&endpoint, CREATED_OR_UPDATED).await
    }

    pub async fn delete_environment_secret(
        &self,
        repo: impl Into<RepoSlug>,
        environment: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Result<bool> {
        let repo = repo.into();
        let endpoint = Endpoint::delete(repo_path(
            &repo,
            &["environments", environment.as_ref(), "secrets", name.as_ref()],
        ));
        self.client.send_status(&endpoint, NO_CONTENT).await
    }
}
