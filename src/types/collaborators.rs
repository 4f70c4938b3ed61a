//! Repository collaborators and invitations

use super::common::{Repository, SimpleUser};
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    #[serde(flatten)]
    pub user: SimpleUser,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub admin: bool,
    #[serde(default)]
    pub maintain: Option<bool>,
    pub push: bool,
    #[serde(default)]
    pub triage: Option<bool>,
    pub pull: bool,
}

/// Response of `GET /repos/{owner}/{repo}/collaborators/{username}/permission`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorPermission {
    /// Legacy permission level: `admin`, `write`, `read` or `none`
    pub permission: String,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub user: Option<Collaborator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInvitation {
    pub id: u64,
    #[serde(default)]
    pub node_id: Option<String>,
    pub repository: Repository,
    #[serde(default)]
    pub invitee: Option<SimpleUser>,
    #[serde(default)]
    pub inviter: Option<SimpleUser>,
    pub permissions: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expired: Option<bool>,
    pub url: String,
    pub html_url: String,
}

/// Filter for `affiliation` when listing collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    Outside,
    Direct,
    All,
}

impl Affiliation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Affiliation::Outside => "outside",
            Affiliation::Direct => "direct",
            Affiliation::All => "all",
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Affiliation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "outside" => Ok(Affiliation::Outside),
            "direct" => Ok(Affiliation::Direct),
            "all" => Ok(Affiliation::All),
            other => Err(anyhow!(
                "Invalid affiliation '{}': expected outside, direct or all",
                other
            )),
        }
    }
}

/// Repository role granted to a collaborator
///
/// Organizations may define custom roles, carried verbatim by `Custom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
    Custom(String),
}

impl Permission {
    pub fn as_str(&self) -> &str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
            Permission::Custom(role) => role,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Permission cannot be empty"));
        }
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "pull" => Permission::Pull,
            "triage" => Permission::Triage,
            "push" => Permission::Push,
            "maintain" => Permission::Maintain,
            "admin" => Permission::Admin,
            _ => Permission::Custom(trimmed.to_string()),
        })
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Query filters for listing collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorFilter {
    pub affiliation: Option<Affiliation>,
    pub permission: Option<Permission>,
}

impl CollaboratorFilter {
    pub fn affiliation(mut self, affiliation: Affiliation) -> Self {
        self.affiliation = Some(affiliation);
        self
    }

    pub fn permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }
}
