//! Static token authentication

use anyhow::{Result, anyhow};
use std::fmt;

/// A personal access token (or any other bearer token) sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Reject tokens that can never authenticate
    pub fn validate_token(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(anyhow!("GitHub token is empty"));
        }
        if self.token.chars().any(char::is_whitespace) {
            return Err(anyhow!("GitHub token must not contain whitespace"));
        }
        Ok(())
    }
}

// Never print the token itself
impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}
