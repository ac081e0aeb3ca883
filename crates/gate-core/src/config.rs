// Rust guideline compliant 2026-10-19

//! Configuration management for Gate.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the per-repository configuration file.
pub const CONFIG_FILE_NAME: &str = "gate.toml";

/// Log levels accepted by `log_level` and `GATE_LOG_LEVEL`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for Gate behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name that marks a project to check.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Formatting check command, program first.
    #[serde(default = "default_fmt_command")]
    pub fmt_command: Vec<String>,

    /// Lint command, program first.
    #[serde(default = "default_lint_command")]
    pub lint_command: Vec<String>,

    /// Directory names skipped during manifest discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Log level for the hook binaries.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_manifest_name() -> String {
    "Cargo.toml".to_string()
}

fn default_fmt_command() -> Vec<String> {
    ["cargo", "fmt", "--", "--check"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_lint_command() -> Vec<String> {
    ["cargo", "clippy", "--", "-D", "warnings"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
            fmt_command: default_fmt_command(),
            lint_command: default_lint_command(),
            exclude: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration for a repository.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<repo_root>/gate.toml`, if present
    /// 3. Environment variables with `GATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Working directory of the repository
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        let config_path = repo_root.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };
        config.finish()
    }

    /// Loads configuration from an explicit file path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InvalidConfig(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::read_file(path)?.finish()
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_env_overrides();
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GATE_MANIFEST_NAME` - Manifest file name
    /// - `GATE_FMT_COMMAND` - Formatting command, whitespace separated
    /// - `GATE_LINT_COMMAND` - Lint command, whitespace separated
    /// - `GATE_EXCLUDE` - Excluded directory names, comma separated
    /// - `GATE_LOG_LEVEL` - Log level
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GATE_MANIFEST_NAME") {
            self.manifest_name = val;
        }

        if let Ok(val) = std::env::var("GATE_FMT_COMMAND") {
            self.fmt_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("GATE_LINT_COMMAND") {
            self.lint_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("GATE_EXCLUDE") {
            self.exclude = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(val) = std::env::var("GATE_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - manifest_name is empty or contains a path separator
    /// - either command is empty
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.manifest_name.is_empty() {
            return Err(Error::InvalidConfig(
                "manifest_name must not be empty".to_string(),
            ));
        }

        if self.manifest_name.contains('/') || self.manifest_name.contains('\\') {
            return Err(Error::InvalidConfig(format!(
                "manifest_name must be a file name, got {}",
                self.manifest_name
            )));
        }

        if self.fmt_command.is_empty() {
            return Err(Error::InvalidConfig(
                "fmt_command must not be empty".to_string(),
            ));
        }

        if self.lint_command.is_empty() {
            return Err(Error::InvalidConfig(
                "lint_command must not be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<repo_root>/gate.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        std::fs::write(repo_root.join(CONFIG_FILE_NAME), self.to_toml()?)?;
        Ok(())
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }
}

fn split_command(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; serialize tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("GATE_MANIFEST_NAME");
        std::env::remove_var("GATE_FMT_COMMAND");
        std::env::remove_var("GATE_LINT_COMMAND");
        std::env::remove_var("GATE_EXCLUDE");
        std::env::remove_var("GATE_LOG_LEVEL");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.manifest_name, "Cargo.toml");
        assert_eq!(config.fmt_command, vec!["cargo", "fmt", "--", "--check"]);
        assert_eq!(
            config.lint_command,
            vec!["cargo", "clippy", "--", "-D", "warnings"]
        );
        assert!(config.exclude.is_empty());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_partial_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "exclude = [\"target\", \"vendor\"]\nlint_command = [\"cargo\", \"clippy\"]\n",
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.exclude, vec!["target", "vendor"]);
        assert_eq!(config.lint_command, vec!["cargo", "clippy"]);
        assert_eq!(config.manifest_name, "Cargo.toml");
    }

    #[test]
    fn test_config_invalid_toml() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "exclude = [").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_env_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        std::env::set_var("GATE_FMT_COMMAND", "cargo  fmt --all -- --check");
        std::env::set_var("GATE_EXCLUDE", "target, ,node_modules");
        std::env::set_var("GATE_LOG_LEVEL", "debug");

        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path());
        clear_all_env_vars();
        let config = config.unwrap();

        assert_eq!(
            config.fmt_command,
            vec!["cargo", "fmt", "--all", "--", "--check"]
        );
        assert_eq!(config.exclude, vec!["target", "node_modules"]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_command_rejected() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        std::env::set_var("GATE_LINT_COMMAND", "   ");

        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(temp_dir.path());
        clear_all_env_vars();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_manifest_name_with_separator_rejected() {
        let config = Config {
            manifest_name: "sub/Cargo.toml".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            exclude: vec!["target".to_string()],
            ..Config::default()
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
