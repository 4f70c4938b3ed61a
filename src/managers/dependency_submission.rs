//! Dependency submission API

use super::repo_path;
use crate::types::{Snapshot, SnapshotResult};
use anyhow::{Context, Result};
use gh_rest::{Endpoint, GitHubClient, RepoSlug};
use tracing::info;

pub struct DependencySubmissionManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> DependencySubmissionManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Submit a dependency snapshot for a commit
    ///
    /// The snapshot is validated locally first; an invalid snapshot never
    /// reaches the API.
    pub async fn create_snapshot(
        &self,
        repo: impl Into<RepoSlug>,
        snapshot: &Snapshot,
    ) -> Result<SnapshotResult> {
        snapshot
            .validate()
            .context("Refusing to submit invalid dependency snapshot")?;

        let repo = repo.into();
        let endpoint = Endpoint::post(repo_path(&repo, &["dependency-graph", "snapshots"]))
            .json(snapshot)?;
        let result: SnapshotResult = self.client.send_json(&endpoint).await?;

        info!(
            repo = %repo,
            snapshot_id = result.id,
            manifests = snapshot.manifests.len(),
            "Dependency snapshot submitted"
        );
        Ok(result)
    }
}
