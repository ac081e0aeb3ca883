// Rust guideline compliant 2026-10-19

//! Gate Core Library
//!
//! This crate provides the building blocks of the Gate pre-commit hook:
//! - Repository root discovery
//! - Manifest discovery
//! - Check commands and the subprocess runner seam
//! - The fail-fast hook runner
//! - Configuration and error types

pub mod check;
pub mod config;
pub mod error;
pub mod manifest;
pub mod repo;
pub mod runner;

pub use check::{CheckCommand, CheckKind, CheckOutcome, CommandRunner, ProcessRunner};
pub use config::Config;
pub use error::{Error, Result};
pub use manifest::{discover_manifests, Manifest};
pub use repo::{hooks_dir, GitRootLocator, RootLocator};
pub use runner::{HookRunner, RunReport};
