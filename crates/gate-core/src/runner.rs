// Rust guideline compliant 2026-10-19

//! The hook runner: discover manifests under a root, check each one.

use crate::check::{CheckCommand, CommandRunner};
use crate::manifest::{discover_manifests, Manifest};
use crate::{Config, Error, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Repository root the run was based on.
    pub root: PathBuf,
    /// Number of manifests checked.
    pub manifests: usize,
    /// Number of check commands invoked.
    pub checks: usize,
}

/// Runs the format and lint checks over every manifest in a repository.
pub struct HookRunner<R> {
    runner: R,
    config: Config,
}

impl<R: CommandRunner> HookRunner<R> {
    /// Creates a runner from its collaborators.
    pub fn new(runner: R, config: Config) -> Self {
        Self { runner, config }
    }

    /// Returns the command runner, e.g. to inspect a recording fake.
    pub fn command_runner(&self) -> &R {
        &self.runner
    }

    /// Runs the checks for the repository rooted at `root`.
    ///
    /// Stops at the first failure: a manifest whose format check fails never
    /// has its lint run, and later manifests are never checked.
    ///
    /// # Arguments
    ///
    /// * `root` - Resolved repository working directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A configured check command is empty
    /// - Manifest discovery fails
    /// - A check command cannot be started or exits unsuccessfully
    pub fn run(&mut self, root: PathBuf) -> Result<RunReport> {
        info!(root = %root.display(), "running pre-commit checks");
        let commands = CheckCommand::from_config(&self.config)?;
        let manifests = discover_manifests(&root, &self.config)?;
        if manifests.is_empty() {
            info!("no {} found, nothing to check", self.config.manifest_name);
        }

        let mut checks = 0;
        for manifest in &manifests {
            info!(manifest = %manifest.relative_to(&root).display(), "checking");
            for command in &commands {
                self.check(command, manifest)?;
                checks += 1;
            }
        }

        info!(manifests = manifests.len(), checks, "all checks passed");
        Ok(RunReport {
            root,
            manifests: manifests.len(),
            checks,
        })
    }

    fn check(&mut self, command: &CheckCommand, manifest: &Manifest) -> Result<()> {
        debug!(kind = %command.kind, command = %command, "invoking");
        let outcome = self.runner.run(command, manifest.dir())?;
        if outcome.success {
            Ok(())
        } else {
            Err(Error::CheckFailed {
                kind: command.kind,
                manifest: manifest.path().to_path_buf(),
                code: outcome.code,
            })
        }
    }
}
