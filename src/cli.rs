//! CLI argument parsing and command dispatch

pub mod args;
pub mod patch;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, TargetResolution};
