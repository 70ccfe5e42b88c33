//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic
//! - config_layer: configuration layering and CLI overrides
//! - output: report rendering

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
