//! sescd-desktop library root.
//!
//! Re-exports internal modules so that integration tests can exercise the
//! config and scoring commands directly without going through the CLI.

pub mod commands;
pub mod config;
pub mod console;
