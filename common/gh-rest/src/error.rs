//! API error type

use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// A non-success response from the GitHub API
///
/// Returned inside [`anyhow::Error`]; use `err.downcast_ref::<ApiError>()` to
/// inspect the status.
#[derive(Debug, Clone, thiserror::Error)]
#[error("GitHub API request failed ({status}): {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub documentation_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
}

impl ApiError {
    /// Build from a status and a response body
    ///
    /// GitHub's `{"message", "documentation_url"}` payload is used when present,
    /// otherwise the raw body (or the canonical reason for an empty body).
    pub fn from_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                status,
                message: parsed.message,
                documentation_url: parsed.documentation_url,
            },
            Err(_) => {
                let message = if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body.trim().to_string()
                };
                Self {
                    status,
                    message,
                    documentation_url: None,
                }
            }
        }
    }

    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_body(status, &body)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_github_error_payload() {
        let err = ApiError::from_body(
            StatusCode::NOT_FOUND,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        );
        assert!(err.is_not_found());
        assert_eq!(err.message, "Not Found");
        assert_eq!(
            err.documentation_url.as_deref(),
            Some("https://docs.github.com/rest")
        );
        assert_eq!(
            err.to_string(),
            "GitHub API request failed (404 Not Found): Not Found"
        );
    }

    #[test]
    fn test_falls_back_to_raw_body() {
        let err = ApiError::from_body(StatusCode::BAD_GATEWAY, "upstream exploded\n");
        assert_eq!(err.message, "upstream exploded");
        assert!(err.documentation_url.is_none());
    }

    #[test]
    fn test_empty_body_uses_canonical_reason() {
        let err = ApiError::from_body(StatusCode::FORBIDDEN, "");
        assert_eq!(err.message, "Forbidden");
    }
}
