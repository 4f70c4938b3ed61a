//! Gitignore command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::cli::GitignoreAction;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct GitignoreCommand {
    pub action: GitignoreAction,
}

#[async_trait]
impl Command for GitignoreCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let gitignore = context.github.gitignore();

        match &self.action {
            GitignoreAction::List => {
                let names = gitignore.list_templates().await?;
                if context.emit_json(&names)? {
                    return Ok(());
                }
                for name in &names {
                    println!("{} {}", "•".blue(), name);
                }
                println!();
                println!("{}", format!("Total: {} templates", names.len()).green());
            }
            GitignoreAction::Get { name, raw } => {
                validators::validate_name("template", name)?;
                if *raw {
                    print!("{}", gitignore.get_template_raw(name).await?);
                    return Ok(());
                }
                let template = gitignore.get_template(name).await?;
                if context.emit_json(&template)? {
                    return Ok(());
                }
                println!("{}", format!("# {}", template.name).bold());
                print!("{}", template.source);
            }
        }
        Ok(())
    }
}
