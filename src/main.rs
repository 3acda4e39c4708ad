//! Bugtracker CLI - record and browse game bug reports

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use bugtracker::config::{self, StorageSettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "bugtracker")]
#[command(version)]
#[command(about = "Record and browse bug reports for Star Citizen")]
#[command(long_about = r#"
Bugtracker keeps a local list of the bugs you run into:
  • Where the bug was (Ship, FPS, Terminal, ...)
  • Steps to replicate it
  • The date it was found

Example usage:
  bugtracker add --category Ship --steps "Fly into a rock"
  bugtracker list
  bugtracker delete --id 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with the default database location
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Record a new bug report
    Add {
        /// Where the bug was (Ship, FPS, Terminal, etc.)
        #[arg(long)]
        category: String,

        /// Steps to replicate
        #[arg(long)]
        steps: String,

        /// Date found as YYYY/M/D (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List every recorded bug report
    List,

    /// Delete a bug report by id
    Delete {
        /// Report id
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

/// Print a JSON envelope for machine-readable output
pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        let envelope = serde_json::json!({
            "ok": true,
            "command": command,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Init { force } => commands::run_init(output_mode, &config_path, cli.database, force),
        Commands::Add { category, steps, date } => {
            let settings = storage_settings(cli.database, &config_path)?;
            commands::run_add(output_mode, &settings, category, steps, date.as_deref())
        }
        Commands::List => {
            let settings = storage_settings(cli.database, &config_path)?;
            commands::run_list(output_mode, &settings)
        }
        Commands::Delete { id } => {
            let settings = storage_settings(cli.database, &config_path)?;
            commands::run_delete(output_mode, &settings, id)
        }
    }
}

fn storage_settings(database: Option<PathBuf>, config_path: &std::path::Path) -> anyhow::Result<StorageSettings> {
    let loaded = config::load_config(Some(config_path))?;
    let settings = StorageSettings::resolve(database, loaded.as_ref());
    tracing::debug!("Using {:?} storage at {}", settings.backend, settings.database.display());
    Ok(settings)
}
