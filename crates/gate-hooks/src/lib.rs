// Rust guideline compliant 2026-10-19

//! Gate Git Hooks
//!
//! This crate provides the Git hook side of Gate:
//! - The pre-commit hook entry point
//! - Installation of the hook shim into a repository
//! - Logging setup shared by the binaries

pub mod install;
pub mod logging;
pub mod pre_commit;

pub use install::install_pre_commit;
pub use logging::init_tracing;
pub use pre_commit::{load_config, pre_commit_hook, PreCommit};
