// Rust guideline compliant 2026-10-19

//! Gate CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
