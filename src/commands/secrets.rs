//! Secrets command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::cli::{SecretScope, SecretsAction};
use crate::types::{
    EncryptedSecret, OrgSecret, OrgSecretRequest, Secret, SecretList, SecretVisibility,
};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use gh_rest::ListOptions;

pub struct SecretsCommand {
    pub action: SecretsAction,
}

fn print_secrets(list: &SecretList<Secret>) {
    if list.secrets.is_empty() {
        println!("{}", "No secrets found".yellow());
        return;
    }
    for secret in &list.secrets {
        println!(
            "{} {}  updated {}",
            "•".blue(),
            secret.name.bold(),
            secret.updated_at.format("%Y-%m-%d")
        );
    }
    println!();
    println!("{}", format!("Total: {} secrets", list.total_count).green());
}

fn print_org_secrets(list: &SecretList<OrgSecret>) {
    if list.secrets.is_empty() {
        println!("{}", "No secrets found".yellow());
        return;
    }
    for secret in &list.secrets {
        println!(
            "{} {}  {}  updated {}",
            "•".blue(),
            secret.name.bold(),
            secret.visibility.to_string().cyan(),
            secret.updated_at.format("%Y-%m-%d")
        );
    }
    println!();
    println!("{}", format!("Total: {} secrets", list.total_count).green());
}

fn validate_scope(scope: &SecretScope) -> Result<()> {
    match scope {
        SecretScope::Org(org) => validators::validate_login("--org", org),
        SecretScope::Environment(_, env) => validators::validate_name("--env", env),
        SecretScope::Repo(_) => Ok(()),
    }
}

#[async_trait]
impl Command for SecretsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let secrets = context.github.secrets();

        match &self.action {
            SecretsAction::PublicKey { scope } => {
                let scope = scope.scope()?;
                validate_scope(&scope)?;
                let key = match &scope {
                    SecretScope::Repo(repo) => secrets.repo_public_key(repo).await?,
                    SecretScope::Org(org) => secrets.org_public_key(org).await?,
                    SecretScope::Environment(repo, env) => {
                        secrets.environment_public_key(repo, env).await?
                    }
                };
                if context.emit_json(&key)? {
                    return Ok(());
                }
                println!("{} {}", "Key id:".bold(), key.key_id);
                println!("{} {}", "Key:".bold(), key.key);
            }
            SecretsAction::List { scope, page } => {
                validators::validate_page(page.page)?;
                let scope = scope.scope()?;
                validate_scope(&scope)?;
                let options = ListOptions::from(page);
                match &scope {
                    SecretScope::Repo(repo) => {
                        let list = secrets.list_repo_secrets(repo, options).await?;
                        if !context.emit_json(&list)? {
                            print_secrets(&list);
                        }
                    }
                    SecretScope::Org(org) => {
                        let list = secrets.list_org_secrets(org, options).await?;
                        if !context.emit_json(&list)? {
                            print_org_secrets(&list);
                        }
                    }
                    SecretScope::Environment(repo, env) => {
                        let list = secrets.list_environment_secrets(repo, env, options).await?;
                        if !context.emit_json(&list)? {
                            print_secrets(&list);
                        }
                    }
                }
            }
            SecretsAction::Get { name, scope } => {
                let scope = scope.scope()?;
                validate_scope(&scope)?;
                match &scope {
                    SecretScope::Repo(repo) => {
                        let secret = secrets.get_repo_secret(repo, name).await?;
                        if !context.emit_json(&secret)? {
                            println!("{} created {}", secret.name.bold(), secret.created_at);
                            println!("  updated {}", secret.updated_at);
                        }
                    }
                    SecretScope::Org(org) => {
                        let secret = secrets.get_org_secret(org, name).await?;
                        if !context.emit_json(&secret)? {
                            println!("{} created {}", secret.name.bold(), secret.created_at);
                            println!("  updated {}", secret.updated_at);
                            println!("  visibility {}", secret.visibility.to_string().cyan());
                        }
                    }
                    SecretScope::Environment(repo, env) => {
                        let secret = secrets.get_environment_secret(repo, env, name).await?;
                        if !context.emit_json(&secret)? {
                            println!("{} created {}", secret.name.bold(), secret.created_at);
                            println!("  updated {}", secret.updated_at);
                        }
                    }
                }
            }
            SecretsAction::Set {
                name,
                encrypted_value,
                key_id,
                visibility,
                repository_ids,
                scope,
            } => {
                let scope = scope.scope()?;
                validate_scope(&scope)?;
                validators::validate_org_secret_flags(
                    matches!(scope, SecretScope::Org(_)),
                    *visibility,
                    repository_ids,
                )?;
                let secret = EncryptedSecret::new(encrypted_value.as_str(), key_id.as_str());
                let ok = match &scope {
                    SecretScope::Repo(repo) => secrets.put_repo_secret(repo, name, &secret).await?,
                    SecretScope::Environment(repo, env) => {
                        secrets.put_environment_secret(repo, env, name, &secret).await?
                    }
                    SecretScope::Org(org) => {
                        let visibility = visibility.unwrap_or(SecretVisibility::Private);
                        validators::validate_selected_repositories(visibility, repository_ids)?;
                        let mut request = OrgSecretRequest::new(secret, visibility);
                        if !repository_ids.is_empty() {
                            request = request.with_selected_repositories(repository_ids.clone());
                        }
                        secrets.put_org_secret(org, name, &request).await?
                    }
                };
                context.report(
                    ok,
                    &format!("Secret {} saved", name),
                    &format!("Secret {} was not saved", name),
                )?;
            }
            SecretsAction::Delete { name, scope } => {
                let scope = scope.scope()?;
                validate_scope(&scope)?;
                let ok = match &scope {
                    SecretScope::Repo(repo) => secrets.delete_repo_secret(repo, name).await?,
                    SecretScope::Org(org) => secrets.delete_org_secret(org, name).await?,
                    SecretScope::Environment(repo, env) => {
                        secrets.delete_environment_secret(repo, env, name).await?
                    }
                };
                context.report(
                    ok,
                    &format!("Secret {} deleted", name),
                    &format!("Secret {} was not deleted", name),
                )?;
            }
            SecretsAction::Shared { repo, page } => {
                validators::validate_page(page.page)?;
                let list = secrets
                    .list_repo_organization_secrets(repo, page.into())
                    .await?;
                if !context.emit_json(&list)? {
                    print_secrets(&list);
                }
            }
            SecretsAction::Repos { name, org, page } => {
                validators::validate_login("--org", org)?;
                validators::validate_page(page.page)?;
                let selected = secrets
                    .list_selected_repos_for_org_secret(org, name, page.into())
                    .await?;
                if !context.emit_json(&selected)? {
                    super::print_repositories(&selected.repositories);
                }
            }
            SecretsAction::SetRepos {
                name,
                org,
                repository_ids,
            } => {
                validators::validate_login("--org", org)?;
                let ok = secrets
                    .set_selected_repos_for_org_secret(org, name, repository_ids)
                    .await?;
                context.report(
                    ok,
                    &format!(
                        "Secret {} is now shared with {} repositories",
                        name,
                        repository_ids.len()
                    ),
                    &format!("Repositories for secret {} were not updated", name),
                )?;
            }
            SecretsAction::AddRepo {
                name,
                org,
                repository_id,
            } => {
                validators::validate_login("--org", org)?;
                let ok = secrets
                    .add_selected_repo_to_org_secret(org, name, *repository_id)
                    .await?;
                context.report(
                    ok,
                    &format!("Repository {} can now read {}", repository_id, name),
                    &format!("Repository {} was not added to {}", repository_id, name),
                )?;
            }
            SecretsAction::RemoveRepo {
                name,
                org,
                repository_id,
            } => {
                validators::validate_login("--org", org)?;
                let ok = secrets
                    .remove_selected_repo_from_org_secret(org, name, *repository_id)
                    .await?;
                context.report(
                    ok,
                    &format!("Repository {} can no longer read {}", repository_id, name),
                    &format!("Repository {} was not removed from {}", repository_id, name),
                )?;
            }
        }
        Ok(())
    }
}
