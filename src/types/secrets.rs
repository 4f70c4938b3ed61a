//! GitHub Actions secrets

use super::common::Repository;
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public key used to seal secret values before upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub key_id: String,
    /// Base64-encoded libsodium public key
    pub key: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Repository or environment secret metadata (values are never returned)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgSecret {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub visibility: SecretVisibility,
    #[serde(default)]
    pub selected_repositories_url: Option<String>,
}

impl AsRef<str> for OrgSecret {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretList<T> {
    pub total_count: u64,
    pub secrets: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRepositories {
    pub total_count: u64,
    pub repositories: Vec<Repository>,
}

/// Which repositories in an organization can read an organization secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretVisibility {
    All,
    Private,
    Selected,
}

impl SecretVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretVisibility::All => "all",
            SecretVisibility::Private => "private",
            SecretVisibility::Selected => "selected",
        }
    }
}

impl fmt::Display for SecretVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretVisibility {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SecretVisibility::All),
            "private" => Ok(SecretVisibility::Private),
            "selected" => Ok(SecretVisibility::Selected),
            other => Err(anyhow!(
                "Invalid secret visibility '{}': expected all, private or selected",
                other
            )),
        }
    }
}

/// A secret value already sealed against the target's [`PublicKey`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedSecret {
    pub encrypted_value: String,
    pub key_id: String,
}

impl EncryptedSecret {
    pub fn new(encrypted_value: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            encrypted_value: encrypted_value.into(),
            key_id: key_id.into(),
        }
    }
}

/// Body for creating or updating an organization secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgSecretRequest {
    pub encrypted_value: String,
    pub key_id: String,
    pub visibility: SecretVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}

impl OrgSecretRequest {
    pub fn new(secret: EncryptedSecret, visibility: SecretVisibility) -> Self {
        Self {
            encrypted_value: secret.encrypted_value,
            key_id: secret.key_id,
            visibility,
            selected_repository_ids: None,
        }
    }

    /// Restrict the secret to the given repositories (implies `selected` visibility)
    pub fn with_selected_repositories(mut self, ids: Vec<u64>) -> Self {
        self.visibility = SecretVisibility::Selected;
        self.selected_repository_ids = Some(ids);
        self
    }
}

/// Check a secret name against GitHub's naming rules before sending it
///
/// Names may only contain alphanumerics and underscores, must not start with a
/// digit, and must not use the reserved `GITHUB_` prefix.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("Secret name cannot be empty"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(anyhow!(
            "Secret name '{}' may only contain alphanumeric characters and underscores",
            name
        ));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(anyhow!("Secret name '{}' cannot start with a number", name));
    }
    if name.to_ascii_uppercase().starts_with("GITHUB_") {
        return Err(anyhow!("Secret name '{}' cannot start with GITHUB_", name));
    }
    Ok(())
}
