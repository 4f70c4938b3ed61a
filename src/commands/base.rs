//! Base types and traits for the command pattern

use crate::client::GitHub;
use anyhow::{Result, bail};
use colored::*;
use serde::Serialize;

/// Context passed to all commands containing the shared client and output options
#[derive(Clone)]
pub struct CommandContext {
    /// Client built from the loaded configuration
    pub github: GitHub,
    /// Print raw JSON instead of the human-readable summary
    pub json: bool,
}

impl CommandContext {
    pub fn new(github: GitHub, json: bool) -> Self {
        Self { github, json }
    }

    /// Print `value` as pretty JSON when `--json` was given
    ///
    /// Returns `true` when the value was printed, so callers can skip the
    /// human-readable rendering.
    pub fn emit_json<T: Serialize>(&self, value: &T) -> Result<bool> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(self.json)
    }

    /// Report the outcome of a call that answers with a status only
    ///
    /// A failed call is returned as an error carrying `failure`, so the
    /// process exits non-zero in both output modes.
    pub fn report(&self, ok: bool, success: &str, failure: &str) -> Result<()> {
        if self.json {
            println!("{}", serde_json::json!({ "success": ok }));
        } else if ok {
            println!("{} {}", "✓".green(), success);
        }
        if !ok {
            bail!("{}", failure);
        }
        Ok(())
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
