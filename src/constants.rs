//! Central constants for the gh-managers library and CLI

/// Default values for GitHub API access
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = gh_rest::DEFAULT_API_URL;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gh-managers/", env!("CARGO_PKG_VERSION"));

    /// Environment variable consulted when no token is configured
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghm.yaml";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}
