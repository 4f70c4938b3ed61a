//! Dependency snapshot command implementation

use super::{Command, CommandContext};
use crate::cli::SnapshotAction;
use crate::types::{Snapshot, SnapshotStatus};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::path::Path;

pub struct SnapshotCommand {
    pub action: SnapshotAction,
}

/// Read a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
}

#[async_trait]
impl Command for SnapshotCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        match &self.action {
            SnapshotAction::Submit { repo, file } => {
                let snapshot = load_snapshot(file)?;
                let result = context
                    .github
                    .dependency_submission()
                    .create_snapshot(repo, &snapshot)
                    .await?;
                if context.emit_json(&result)? {
                    return Ok(());
                }
                let status = match result.result {
                    SnapshotStatus::Success => "SUCCESS".green(),
                    SnapshotStatus::Accepted => "ACCEPTED".cyan(),
                    SnapshotStatus::Invalid => "INVALID".red(),
                    SnapshotStatus::Unknown => "UNKNOWN".yellow(),
                };
                println!("Snapshot {} {}", result.id.to_string().bold(), status);
                println!("  {}", result.message);
            }
        }
        Ok(())
    }
}
