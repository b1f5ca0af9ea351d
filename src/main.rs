use anyhow::Context;
use clap::{Parser, Subcommand};
use env_dts_sync::{init_config, sync_project, SyncOutcome};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Env DTS Sync - keeps a project's generated env.d.ts in sync with injected types
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root containing env-dts.json
    #[arg(short, long, env = "ENV_DTS_ROOT", default_value = ".")]
    root: PathBuf,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or update env.d.ts (default)
    Sync,
    /// Write a default env-dts.json
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Relative roots resolve against the working directory
    let root = if args.root.is_absolute() {
        args.root.clone()
    } else {
        std::env::current_dir()
            .context("Failed to read current directory")?
            .join(&args.root)
    };

    match args.command.unwrap_or(Command::Sync) {
        Command::Sync => {
            let result = sync_project(&root)
                .await
                .with_context(|| format!("Failed to sync types for {}", root.display()))?;

            let verb = match result.outcome {
                SyncOutcome::Created => "created",
                SyncOutcome::Updated => "updated",
            };
            info!(
                active = result.active.len(),
                added = result.added.len(),
                "{} {}",
                result.display_path,
                verb
            );
        }
        Command::Init { force } => {
            let path = init_config(&root, force)
                .await
                .context("Failed to write config")?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
