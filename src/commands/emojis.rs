//! Emojis command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct EmojisCommand;

#[async_trait]
impl Command for EmojisCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let emojis = context.github.emojis().get_emojis().await?;
        if context.emit_json(&emojis)? {
            return Ok(());
        }

        for (name, url) in &emojis {
            println!(":{}: {}", name.bold(), url.dimmed());
        }
        println!();
        println!("{}", format!("Total: {} emojis", emojis.len()).green());
        Ok(())
    }
}
