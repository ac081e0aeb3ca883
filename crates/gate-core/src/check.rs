// Rust guideline compliant 2026-10-19

//! Check commands and the subprocess seam that runs them.

use crate::{Config, Error, Result};
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// The two checks run for every manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Formatting check, verifies canonical style without rewriting.
    Format,
    /// Static analysis.
    Lint,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Format => write!(f, "format"),
            CheckKind::Lint => write!(f, "lint"),
        }
    }
}

/// A check command with fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    /// Which check this command performs.
    pub kind: CheckKind,
    /// Program to execute, resolved through `PATH`.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CheckCommand {
    /// Builds a command from an argv-style vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty.
    pub fn from_argv(kind: CheckKind, argv: &[String]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            Error::InvalidConfig(format!("{} command must not be empty", kind))
        })?;
        Ok(Self {
            kind,
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Returns the configured format and lint commands, in run order.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured command is empty.
    pub fn from_config(config: &Config) -> Result<[CheckCommand; 2]> {
        Ok([
            Self::from_argv(CheckKind::Format, &config.fmt_command)?,
            Self::from_argv(CheckKind::Lint, &config.lint_command)?,
        ])
    }
}

impl fmt::Display for CheckCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a check command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the command reported success.
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl CheckOutcome {
    /// A successful exit.
    #[must_use]
    pub fn passed() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    /// A failed exit with the given code.
    #[must_use]
    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// Runs check commands in an explicit working directory.
pub trait CommandRunner {
    /// Runs `command` with `dir` as its working directory and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be started. A command that
    /// runs and fails is reported through [`CheckOutcome`].
    fn run(&mut self, command: &CheckCommand, dir: &Path) -> Result<CheckOutcome>;
}

/// Spawns real subprocesses, inheriting stdio so tool output reaches the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &CheckCommand, dir: &Path) -> Result<CheckOutcome> {
        debug!(command = %command, dir = %dir.display(), "running check");
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(dir)
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program.clone(),
                dir: dir.to_path_buf(),
                source,
            })?;
        Ok(CheckOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_argv_splits_program() {
        let command =
            CheckCommand::from_argv(CheckKind::Format, &argv(&["cargo", "fmt", "--check"]))
                .unwrap();
        assert_eq!(command.program, "cargo");
        assert_eq!(command.args, vec!["fmt", "--check"]);
        assert_eq!(command.to_string(), "cargo fmt --check");
    }

    #[test]
    fn test_from_argv_empty_is_error() {
        let result = CheckCommand::from_argv(CheckKind::Lint, &[]);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_from_config_orders_format_first() {
        let [first, second] = CheckCommand::from_config(&Config::default()).unwrap();
        assert_eq!(first.kind, CheckKind::Format);
        assert_eq!(second.kind, CheckKind::Lint);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let command = CheckCommand {
            kind: CheckKind::Format,
            program: "gate-definitely-not-installed".to_string(),
            args: Vec::new(),
        };
        let result = ProcessRunner.run(&command, temp_dir.path());
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_uses_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker"), "").unwrap();

        let present = CheckCommand {
            kind: CheckKind::Lint,
            program: "test".to_string(),
            args: argv(&["-f", "marker"]),
        };
        let outcome = ProcessRunner.run(&present, temp_dir.path()).unwrap();
        assert!(outcome.success);

        let absent = CheckCommand {
            args: argv(&["-f", "missing"]),
            ..present
        };
        let outcome = ProcessRunner.run(&absent, temp_dir.path()).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.code, Some(1));
    }
}
