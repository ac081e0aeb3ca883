// Rust guideline compliant 2026-10-19

//! Command implementations for the Gate CLI.

pub mod config;
pub mod install;
pub mod list;
pub mod run;

use anyhow::Result;
use gate_hooks::PreCommit;
use std::path::PathBuf;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Log level overriding the configured one.
    pub log_level: Option<String>,
    /// Explicit config file path.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Resolves the repository from the current directory, loads its config
    /// and installs logging.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository or configuration cannot be resolved,
    /// or the log level is invalid.
    pub fn prepare(&self) -> Result<PreCommit> {
        let cwd = std::env::current_dir()?;
        let hook = PreCommit::prepare(&cwd, self.config.as_deref())?;
        let level = self
            .log_level
            .as_deref()
            .unwrap_or(hook.config().log_level.as_str());
        gate_hooks::init_tracing(level)?;
        Ok(hook)
    }
}
