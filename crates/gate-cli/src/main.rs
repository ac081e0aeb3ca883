// Rust guideline compliant 2026-10-19

//! Gate CLI Application
//!
//! Runs and installs the Cargo pre-commit checks.

use clap::Parser;
use gate_cli::commands::{self, GlobalOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gate",
    version,
    about = "Gate: run cargo fmt and clippy for every crate before committing",
    long_about = "Gate finds every Cargo.toml in the repository and runs a formatting check and a lint for each one, stopping at the first failure. Installed as a Git pre-commit hook, a failure blocks the commit.",
    after_help = "Examples:\n  gate install\n  gate run\n  gate list --json\n  GATE_EXCLUDE=target gate run\n"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the checks, as the pre-commit hook does
    Run,

    /// List the manifests that would be checked
    List {
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Install the pre-commit hook into the current repository
    Install {
        /// Overwrite an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = GlobalOptions {
        log_level: cli.log_level,
        config: cli.config,
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::execute(&options)?,
        Some(Commands::List { json }) => commands::list::execute(&options, json)?,
        Some(Commands::Install { force }) => commands::install::execute(&options, force)?,
        Some(Commands::Config) => commands::config::execute(&options)?,
    }

    Ok(())
}
