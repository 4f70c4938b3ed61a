//! Command argument validation utilities
//!
//! Checks that run after clap parsing and before any request is sent, for
//! rules clap cannot express on its own.

use crate::types::SecretVisibility;
use anyhow::{Result, anyhow};

/// Longest login GitHub allows for users and organizations
const MAX_LOGIN_LENGTH: usize = 39;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Argument only makes sense together with another value
    RequiresOther { argument: String, requires: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Empty collection when at least one item is required
    EmptyCollection { argument: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::RequiresOther { argument, requires } => {
                write!(f, "{} can only be used with {}", argument, requires)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::EmptyCollection { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate a user or organization login
///
/// Logins are ASCII alphanumerics with single inner hyphens, at most 39 characters.
pub fn validate_login(argument: &str, login: &str) -> Result<()> {
    let invalid = |reason: &str| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: argument.to_string(),
            value: login.to_string(),
            reason: reason.to_string(),
        })
    };

    if login.is_empty() {
        return Err(invalid("login cannot be empty"));
    }
    if login.len() > MAX_LOGIN_LENGTH {
        return Err(invalid("login is longer than 39 characters"));
    }
    if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid("only letters, digits and hyphens are allowed"));
    }
    if login.starts_with('-') || login.ends_with('-') || login.contains("--") {
        return Err(invalid("hyphens cannot lead, trail or repeat"));
    }
    Ok(())
}

/// Validate a user or organization login when one was given
pub fn validate_optional_login(argument: &str, login: &Option<String>) -> Result<()> {
    match login {
        Some(login) => validate_login(argument, login),
        None => Ok(()),
    }
}

/// Validate that a secret, environment or template name is not blank
pub fn validate_name(argument: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyCollection {
                argument: argument.to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the repository list sent with an organization secret
///
/// Repository ids are only accepted with `selected` visibility.
pub fn validate_selected_repositories(
    visibility: SecretVisibility,
    repository_ids: &[u64],
) -> Result<()> {
    if !repository_ids.is_empty() && visibility != SecretVisibility::Selected {
        return Err(validation_error_to_anyhow(
            CommandValidationError::RequiresOther {
                argument: "--repository-id".to_string(),
                requires: "--visibility selected".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate that organization-only secret flags were not given for another scope
pub fn validate_org_secret_flags(
    is_org: bool,
    visibility: Option<SecretVisibility>,
    repository_ids: &[u64],
) -> Result<()> {
    if is_org {
        return Ok(());
    }
    let argument = if visibility.is_some() {
        "--visibility"
    } else if !repository_ids.is_empty() {
        "--repository-id"
    } else {
        return Ok(());
    };
    Err(validation_error_to_anyhow(
        CommandValidationError::RequiresOther {
            argument: argument.to_string(),
            requires: "--org".to_string(),
        },
    ))
}

/// Validate pagination flags
pub fn validate_page(page: Option<u32>) -> Result<()> {
    if page == Some(0) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--page".to_string(),
                value: "0".to_string(),
                reason: "pages are numbered from 1".to_string(),
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_accepts_real_logins() {
        assert!(validate_login("--org", "octo-org").is_ok());
        assert!(validate_login("--user", "octocat").is_ok());
        assert!(validate_login("--user", "a1").is_ok());
    }

    #[test]
    fn test_validate_login_rejects_bad_logins() {
        assert!(validate_login("--org", "").is_err());
        assert!(validate_login("--org", "-octo").is_err());
        assert!(validate_login("--org", "octo-").is_err());
        assert!(validate_login("--org", "oc--to").is_err());
        assert!(validate_login("--org", "octo_org").is_err());
        assert!(validate_login("--org", &"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_login_error_message() {
        let err = validate_login("--user", "bad name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'bad name' for --user: only letters, digits and hyphens are allowed"
        );
    }

    #[test]
    fn test_validate_optional_login() {
        assert!(validate_optional_login("--user", &None).is_ok());
        assert!(validate_optional_login("--user", &Some("octocat".to_string())).is_ok());
        assert!(validate_optional_login("--user", &Some("".to_string())).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("environment", "production").is_ok());
        assert!(validate_name("environment", "release/eu").is_ok());
        assert!(validate_name("environment", "  ").is_err());
    }

    #[test]
    fn test_validate_selected_repositories() {
        assert!(validate_selected_repositories(SecretVisibility::Selected, &[1, 2]).is_ok());
        assert!(validate_selected_repositories(SecretVisibility::Selected, &[]).is_ok());
        assert!(validate_selected_repositories(SecretVisibility::Private, &[]).is_ok());

        let err = validate_selected_repositories(SecretVisibility::All, &[1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--repository-id can only be used with --visibility selected"
        );
    }

    #[test]
    fn test_validate_org_secret_flags() {
        assert!(validate_org_secret_flags(true, Some(SecretVisibility::Selected), &[1]).is_ok());
        assert!(validate_org_secret_flags(false, None, &[]).is_ok());

        let err = validate_org_secret_flags(false, Some(SecretVisibility::All), &[]).unwrap_err();
        assert_eq!(err.to_string(), "--visibility can only be used with --org");
        let err = validate_org_secret_flags(false, None, &[7]).unwrap_err();
        assert_eq!(err.to_string(), "--repository-id can only be used with --org");
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(None).is_ok());
        assert!(validate_page(Some(1)).is_ok());
        assert!(validate_page(Some(0)).is_err());
    }
}
