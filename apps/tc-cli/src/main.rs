//! # tc-cli
//!
//! Command-line interface for Therapy Companion's device-local data:
//! - `tc goals show/set/edit/context/clear` — the user's therapy goals
//! - `tc auth status/sign-in/sign-out` — the local session
//! - `tc data delete-all` — wipe everything the app stores
//! - `tc i18n check` — translation completeness across locale files

mod app;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::CompanionConfig;

/// Therapy Companion CLI — manage goals and local app data.
#[derive(Parser)]
#[command(name = "tc", version, about)]
struct Cli {
    /// Data directory (defaults to the platform data dir + "companion").
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage therapy goals.
    Goals {
        #[command(subcommand)]
        command: commands::goals::GoalsCommands,
    },
    /// Inspect or change the signed-in session.
    Auth {
        #[command(subcommand)]
        command: commands::auth::AuthCommands,
    },
    /// Bulk operations on all stored data.
    Data {
        #[command(subcommand)]
        command: commands::data::DataCommands,
    },
    /// Translation checks.
    I18n {
        #[command(subcommand)]
        command: commands::i18n::I18nCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config::default_data_dir()
            .context("could not determine a data directory; pass --data-dir")?,
    };
    let config = CompanionConfig::load(&data_dir)?;

    // Logs go to stderr so command output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match &cli.command {
        Commands::I18n { command } => commands::i18n::execute(command),
        Commands::Goals { command } => {
            let app = App::open(&config)?;
            commands::goals::execute(command, &app).await
        }
        Commands::Auth { command } => {
            let app = App::open(&config)?;
            commands::auth::execute(command, &app).await
        }
        Commands::Data { command } => {
            let app = App::open(&config)?;
            commands::data::execute(command, &app).await
        }
    }
}
