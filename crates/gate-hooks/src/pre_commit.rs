// Rust guideline compliant 2026-10-19

//! Pre-commit hook implementation.
//!
//! Runs the formatting check and the lint for every manifest in the repository,
//! stopping at the first failure.

use anyhow::{Context, Result};
use gate_core::{
    CommandRunner, Config, GitRootLocator, HookRunner, ProcessRunner, RootLocator, RunReport,
};
use std::path::{Path, PathBuf};

/// A resolved repository and its configuration, ready to be checked.
#[derive(Debug, Clone)]
pub struct PreCommit {
    root: PathBuf,
    config: Config,
}

impl PreCommit {
    /// Resolves the repository root from `start` and loads its configuration.
    ///
    /// # Arguments
    ///
    /// * `start` - Directory the repository lookup starts from
    /// * `config_path` - Explicit config file, instead of `<root>/gate.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` is not inside a repository with a working tree
    /// - The configuration is invalid
    pub fn prepare(start: &Path, config_path: Option<&Path>) -> Result<Self> {
        Self::prepare_with(&GitRootLocator, start, config_path)
    }

    /// Like [`PreCommit::prepare`], resolving the root with `locator`.
    ///
    /// # Errors
    ///
    /// Returns an error if `locator` fails or the configuration is invalid.
    pub fn prepare_with(
        locator: &impl RootLocator,
        start: &Path,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let root = locator.locate(start)?;
        let config = load_config(&root, config_path)?;
        Ok(Self { root, config })
    }

    /// Repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every check with real subprocesses.
    ///
    /// # Errors
    ///
    /// Returns an error if a check cannot be started or fails.
    pub fn run(self) -> Result<RunReport> {
        self.run_with(ProcessRunner)
    }

    /// Runs every check through `runner`.
    ///
    /// # Errors
    ///
    /// Returns an error if a check cannot be started or fails.
    pub fn run_with<R: CommandRunner>(self, runner: R) -> Result<RunReport> {
        let mut hook = HookRunner::new(runner, self.config);
        Ok(hook.run(self.root)?)
    }
}

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `start` - Directory the repository lookup starts from
/// * `config_path` - Explicit config file, instead of `<root>/gate.toml`
///
/// # Returns
///
/// A summary of the checks run if every check passes.
///
/// # Errors
///
/// Returns an error if:
/// - `start` is not inside a repository with a working tree
/// - The configuration is invalid
/// - A check cannot be started or fails
pub fn pre_commit_hook(start: &Path, config_path: Option<&Path>) -> Result<RunReport> {
    PreCommit::prepare(start, config_path)?.run()
}

/// Loads the configuration for a repository root.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or is invalid.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(root),
    };
    config.with_context(|| format!("Failed to load config for {}", root.display()))
}
