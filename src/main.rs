use anyhow::Result;
use clap::Parser;
use gh_managers::cli::{Cli, Commands};
use gh_managers::commands::*;
use gh_managers::config::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Completions need neither a config nor a client
    if let Commands::Completions { shell } = &cli.command {
        write_completions(*shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_default(&cli.config)?;
    let github = config.build_client(cli.token.clone())?;
    let context = CommandContext::new(github, cli.json);

    execute_command(cli.command, &context).await
}

async fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Completions { .. } => {
            unreachable!("Completions are handled in main()")
        }
        Commands::Emojis => EmojisCommand.execute(context).await?,
        Commands::Secrets(action) => SecretsCommand { action }.execute(context).await?,
        Commands::Billing(action) => BillingCommand { action }.execute(context).await?,
        Commands::Watching(action) => WatchingCommand { action }.execute(context).await?,
        Commands::Collaborators(action) => {
            CollaboratorsCommand { action }.execute(context).await?
        }
        Commands::Environments(action) => {
            EnvironmentsCommand { action }.execute(context).await?
        }
        Commands::Snapshot(action) => SnapshotCommand { action }.execute(context).await?,
        Commands::Stars(action) => StarsCommand { action }.execute(context).await?,
        Commands::Gitignore(action) => GitignoreCommand { action }.execute(context).await?,
    }

    Ok(())
}
