//! Repository identifiers and GitHub URL parsing

use anyhow::{Result, anyhow};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// An `owner/name` pair identifying a repository
///
/// Managers accept `impl Into<RepoSlug>`, so a slug can be passed as a tuple,
/// a parsed string, or a repository record from a previous response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoSlug {
    type Err = anyhow::Error;

    /// Accepts `owner/name` shorthand as well as any URL form understood by
    /// [`parse_github_url`]
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let shorthand = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$")?;
        if let Some(captures) = shorthand.captures(trimmed)
            && let (Some(owner), Some(name)) = (captures.get(1), captures.get(2))
        {
            return Ok(Self::new(
                owner.as_str(),
                name.as_str().trim_end_matches(".git"),
            ));
        }

        let (owner, name) = parse_github_url(trimmed)?;
        Ok(Self::new(owner, name))
    }
}

impl From<(&str, &str)> for RepoSlug {
    fn from((owner, name): (&str, &str)) -> Self {
        Self::new(owner, name)
    }
}

impl From<(String, String)> for RepoSlug {
    fn from((owner, name): (String, String)) -> Self {
        Self { owner, name }
    }
}

impl From<&RepoSlug> for RepoSlug {
    fn from(slug: &RepoSlug) -> Self {
        slug.clone()
    }
}

/// Parse GitHub URL to extract owner and repository name
///
/// Supports both github.com and enterprise GitHub instances:
/// - SSH: `git@github.com:owner/repo` or `ssh://git@host/owner/repo`
/// - HTTPS: `https://github.com/owner/repo` (trailing paths such as `/tree/main` are ignored)
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns an error if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim().trim_end_matches('/');

    let patterns = [
        r"^git@[^:]+:([^/]+)/([^/]+)$",
        r"^ssh://(?:[^@/]+@)?[^/]+/([^/]+)/([^/]+)",
        r"^https?://[^/]+/([^/]+)/([^/]+)",
        r"github\.com[:/]([^/]+)/([^/]+)",
    ];

    for pattern in patterns {
        if let Some(captures) = Regex::new(pattern)?.captures(url)
            && let (Some(owner), Some(repo)) = (captures.get(1), captures.get(2))
        {
            let repo = repo.as_str().trim_end_matches(".git");
            if !repo.is_empty() {
                return Ok((owner.as_str().to_string(), repo.to_string()));
            }
        }
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}
