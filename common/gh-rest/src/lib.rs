//! Low-level GitHub REST client
//!
//! This library provides the shared plumbing every resource manager builds on:
//! an authenticated HTTP client, a description of a single API call, and the
//! request/response helpers that turn an [`Endpoint`] into a typed value or a
//! status-derived boolean.
//!
//! ## Modules
//!
//! - [`auth`]: Static token authentication
//! - [`client`]: Core GitHub client implementation and request helpers
//! - [`endpoint`]: Path, query and body description of one API call
//! - [`error`]: Structured API error parsed from GitHub's error payload
//! - [`slug`]: Repository identifiers and GitHub URL parsing

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod slug;

// Re-export public API
pub use auth::GitHubAuth;
pub use client::{GitHubClient, GitHubClientBuilder};
pub use endpoint::{Endpoint, ListOptions};
pub use error::ApiError;
pub use slug::{RepoSlug, parse_github_url};

// Re-exported so downstream crates can name methods without depending on reqwest directly
pub use reqwest::{Method, StatusCode};

/// Default GitHub.com API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned through the `X-GitHub-Api-Version` header
pub const API_VERSION: &str = "2022-11-28";

/// Media types understood by the REST API
pub mod media {
    /// Default JSON representation
    pub const JSON: &str = "application/vnd.github+json";

    /// Raw representation (e.g. gitignore template source as plain text)
    pub const RAW: &str = "application/vnd.github.raw+json";
}
