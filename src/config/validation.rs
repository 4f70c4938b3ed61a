//! Configuration validation
//!
//! Collects every problem in a configuration instead of stopping at the first,
//! so a user fixing `ghm.yaml` sees the whole list at once.

use super::Config;
use anyhow::anyhow;
use reqwest::Url;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// API URL is empty
    EmptyApiUrl,
    /// API URL does not parse or is not http(s)
    InvalidApiUrl(String),
    /// Timeout of zero seconds
    ZeroTimeout,
    /// Token present but blank or containing whitespace
    InvalidToken,
    /// User agent is empty
    EmptyUserAgent,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyApiUrl => write!(f, "api_url cannot be empty"),
            ValidationError::InvalidApiUrl(url) => {
                write!(f, "api_url must be an http(s) URL: '{}'", url)
            }
            ValidationError::ZeroTimeout => write!(f, "timeout_secs must be greater than zero"),
            ValidationError::InvalidToken => {
                write!(f, "token cannot be blank or contain whitespace")
            }
            ValidationError::EmptyUserAgent => write!(f, "user_agent cannot be empty"),
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api_url.trim().is_empty() {
        errors.push(ValidationError::EmptyApiUrl);
    } else if !is_valid_api_url(&config.api_url) {
        errors.push(ValidationError::InvalidApiUrl(config.api_url.clone()));
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if let Some(token) = &config.token
        && (token.trim().is_empty() || token.chars().any(char::is_whitespace))
    {
        errors.push(ValidationError::InvalidToken);
    }

    if config.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_api_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some())
        .unwrap_or(false)
}

/// Converts validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
