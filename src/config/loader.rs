//! Configuration file loading and saving

use super::validation;
use crate::GitHub;
use crate::constants;
use anyhow::{Context, Result};
use gh_rest::GitHubClient;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Contents of `ghm.yaml`
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: constants::github::API_BASE.to_string(),
            user_agent: constants::github::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: constants::config::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))
            .with_context(|| format!("Failed to write config file {}", path))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Pick the token to use: explicit flag, then config file, then `GITHUB_TOKEN`
    pub fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        let present = |token: &String| !token.trim().is_empty();
        explicit
            .filter(present)
            .or_else(|| self.token.clone().filter(present))
            .or_else(|| {
                std::env::var(constants::github::TOKEN_ENV_VAR)
                    .ok()
                    .filter(present)
            })
    }

    /// Build a [`GitHub`] facade from this configuration
    pub fn build_client(&self, explicit_token: Option<String>) -> Result<GitHub> {
        let client = GitHubClient::builder()
            .token_opt(self.resolve_token(explicit_token))
            .base_url(&self.api_url)
            .user_agent(&self.user_agent)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(GitHub::from_client(client))
    }
}
