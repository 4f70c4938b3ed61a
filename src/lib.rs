//! gh-managers - typed managers for GitHub REST resource groups
//!
//! Secrets, billing, watching, collaborators, environments, emojis,
//! dependency submission, starring and gitignore templates, each behind a
//! manager handed out by [`GitHub`].

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod managers;
pub mod types;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use client::GitHub;
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use gh_rest;
pub use gh_rest::{ApiError, ListOptions, RepoSlug};
