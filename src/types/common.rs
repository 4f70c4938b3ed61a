//! Records shared across resource groups

use chrono::{DateTime, Utc};
use gh_rest::RepoSlug;
use serde::{Deserialize, Serialize};

/// A GitHub account as embedded in other payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleUser {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub site_admin: bool,
}

/// Repository record returned by list endpoints (watched, starred, selected repositories)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    #[serde(default)]
    pub node_id: Option<String>,
    pub name: String,
    pub full_name: String,
    pub owner: SimpleUser,
    #[serde(default)]
    pub private: bool,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub url: String,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub watchers_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn slug(&self) -> RepoSlug {
        RepoSlug::new(self.owner.login.as_str(), self.name.as_str())
    }
}

impl From<&Repository> for RepoSlug {
    fn from(repo: &Repository) -> Self {
        repo.slug()
    }
}
