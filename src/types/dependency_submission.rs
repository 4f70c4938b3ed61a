//! Dependency graph snapshots for the dependency submission API

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// User-defined scalar metadata attached to snapshots, manifests and dependencies
pub type Metadata = BTreeMap<String, Value>;

/// Body for `POST /repos/{owner}/{repo}/dependency-graph/snapshots`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version, currently always 0
    pub version: u32,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub job: Job,
    pub detector: Detector,
    pub scanned: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub manifests: BTreeMap<String, Manifest>,
}

impl Snapshot {
    /// New snapshot stamped with the current time
    pub fn new(sha: impl Into<String>, git_ref: impl Into<String>, job: Job, detector: Detector) -> Self {
        Self {
            version: 0,
            sha: sha.into(),
            git_ref: git_ref.into(),
            job,
            detector,
            scanned: Utc::now(),
            metadata: None,
            manifests: BTreeMap::new(),
        }
    }

    /// Add a manifest, keyed by its name
    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifests.insert(manifest.name.clone(), manifest);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Reject snapshots the API would refuse
    pub fn validate(&self) -> Result<()> {
        let sha = Regex::new(r"^[0-9a-fA-F]{40}$")?;
        if !sha.is_match(&self.sha) {
            return Err(anyhow!(
                "Snapshot sha must be a 40 character commit SHA, got '{}'",
                self.sha
            ));
        }
        if !self.git_ref.starts_with("refs/") {
            return Err(anyhow!(
                "Snapshot ref must be a fully qualified ref (refs/...), got '{}'",
                self.git_ref
            ));
        }
        if self.job.correlator.trim().is_empty() {
            return Err(anyhow!("Snapshot job correlator cannot be empty"));
        }
        if self.job.id.trim().is_empty() {
            return Err(anyhow!("Snapshot job id cannot be empty"));
        }
        if self.detector.name.trim().is_empty() || self.detector.version.trim().is_empty() {
            return Err(anyhow!("Snapshot detector name and version are required"));
        }
        for (key, manifest) in &self.manifests {
            if key.trim().is_empty() || manifest.name.trim().is_empty() {
                return Err(anyhow!("Snapshot manifests must be named"));
            }
        }
        Ok(())
    }
}

/// The CI job that produced a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    /// Groups snapshots from the same workflow and job across runs
    pub correlator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl Job {
    /// A job with a freshly generated id
    pub fn new(correlator: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            correlator: correlator.into(),
            html_url: None,
        }
    }

    pub fn with_html_url(mut self, html_url: impl Into<String>) -> Self {
        self.html_url = Some(html_url.into());
        self
    }
}

/// The tool that scanned the dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detector {
    pub name: String,
    pub version: String,
    pub url: String,
}

impl Detector {
    pub fn new(name: impl Into<String>, version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ManifestFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Dependencies keyed by package URL
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resolved: BTreeMap<String, Dependency>,
}

impl Manifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
            metadata: None,
            resolved: BTreeMap::new(),
        }
    }

    /// Path of the manifest file relative to the repository root
    pub fn with_source_location(mut self, path: impl Into<String>) -> Self {
        self.file = Some(ManifestFile {
            source_location: Some(path.into()),
        });
        self
    }

    /// Add a dependency, keyed by its package URL (or `unnamed-N` when it has none)
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        let key = dependency
            .package_url
            .clone()
            .unwrap_or_else(|| format!("unnamed-{}", self.resolved.len()));
        self.resolved.insert(key, dependency);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package URL (purl), e.g. `pkg:cargo/serde@1.0.200`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Package URLs of this dependency's own dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Dependency {
    pub fn new(package_url: impl Into<String>) -> Self {
        Self {
            package_url: Some(package_url.into()),
            metadata: None,
            relationship: None,
            scope: None,
            dependencies: Vec::new(),
        }
    }

    pub fn direct(package_url: impl Into<String>) -> Self {
        Self::new(package_url).relationship(Relationship::Direct)
    }

    pub fn indirect(package_url: impl Into<String>) -> Self {
        Self::new(package_url).relationship(Relationship::Indirect)
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn depends_on(mut self, package_url: impl Into<String>) -> Self {
        self.dependencies.push(package_url.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Direct,
    Indirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Runtime,
    Development,
}

/// Response to a snapshot submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResult {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub result: SnapshotStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotStatus {
    Success,
    Accepted,
    Invalid,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA: &str = "ce587453ced02b1526dfb4cb910479d431683101";

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            SHA,
            "refs/heads/main",
            Job::new("deps-ci_build"),
            Detector::new("cargo-detector", "0.1.0", "https://example.com/detector"),
        )
        .with_manifest(
            Manifest::new("Cargo.lock")
                .with_source_location("Cargo.lock")
                .with_dependency(
                    Dependency::direct("pkg:cargo/serde@1.0.200")
                        .scope(Scope::Runtime)
                        .depends_on("pkg:cargo/serde_derive@1.0.200"),
                )
                .with_dependency(Dependency::indirect("pkg:cargo/serde_derive@1.0.200")),
        )
    }

    #[test]
    fn test_snapshot_serializes_in_api_shape() {
        let value = serde_json::to_value(sample_snapshot()).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["ref"], "refs/heads/main");
        assert!(value.get("metadata").is_none());
        let serde = &value["manifests"]["Cargo.lock"]["resolved"]["pkg:cargo/serde@1.0.200"];
        assert_eq!(serde["relationship"], "direct");
        assert_eq!(serde["scope"], "runtime");
        assert_eq!(serde["dependencies"][0], "pkg:cargo/serde_derive@1.0.200");
        assert_eq!(
            value["manifests"]["Cargo.lock"]["file"]["source_location"],
            "Cargo.lock"
        );
    }

    #[test]
    fn test_job_new_generates_unique_ids() {
        let a = Job::new("ci");
        let b = Job::new("ci");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_validate_accepts_well_formed_snapshot() {
        assert!(sample_snapshot().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_sha_and_bare_ref() {
        let mut snapshot = sample_snapshot();
        snapshot.sha = "abc123".to_string();
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample_snapshot();
        snapshot.git_ref = "main".to_string();
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample_snapshot();
        snapshot.job.correlator = " ".to_string();
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_snapshot_result_statuses() {
        let result: SnapshotResult = serde_json::from_str(
            r#"{"id":12345,"created_at":"2018-05-04T01:14:52Z","message":"Dependency results for the repo have been successfully updated.","result":"SUCCESS"}"#,
        )
        .unwrap();
        assert_eq!(result.result, SnapshotStatus::Success);

        let odd: SnapshotStatus = serde_json::from_str(r#""PENDING_REVIEW""#).unwrap();
        assert_eq!(odd, SnapshotStatus::Unknown);
    }
}
