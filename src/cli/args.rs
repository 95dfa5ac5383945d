//! CLI argument parsing using clap
//!
//! The tool deliberately keeps the degrade-to-default semantics of its
//! version argument: a missing, malformed, or duplicated version never
//! aborts the run, it only earns a message and falls back to the default
//! target. That is why the positional arguments are collected as plain
//! strings and resolved here rather than validated by clap.

use crate::types::{DEFAULT_TARGET, Version};
use clap::{Parser, ValueEnum};

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// cmakemin CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cmakemin")]
#[command(about = "Raise the cmake_minimum_required version in ./CMakeLists.txt")]
#[command(version)]
pub struct Cli {
    /// Target version of the form major.minor[.patch] (defaults to 3.5.0)
    pub versions: Vec<String>,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Why the default target was used instead of a caller-supplied one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    /// No positional argument was given
    NoArgument,
    /// The single argument did not parse as major.minor[.patch]
    Malformed(String),
    /// More than one positional argument was given
    TooManyArguments,
}

/// Result of resolving the positional arguments into a target version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetResolution {
    /// The caller supplied a well-formed version
    Explicit(Version),
    /// Fell back to [`DEFAULT_TARGET`]
    Defaulted(DefaultReason),
}

impl TargetResolution {
    /// The target version to patch towards
    pub fn target(&self) -> Version {
        match self {
            TargetResolution::Explicit(version) => *version,
            TargetResolution::Defaulted(_) => DEFAULT_TARGET,
        }
    }
}

/// Resolves the positional arguments into a target version
pub fn resolve_target(versions: &[String]) -> TargetResolution {
    match versions {
        [] => TargetResolution::Defaulted(DefaultReason::NoArgument),
        [arg] => match Version::parse(arg) {
            Some(version) => TargetResolution::Explicit(version),
            None => TargetResolution::Defaulted(DefaultReason::Malformed(arg.clone())),
        },
        _ => TargetResolution::Defaulted(DefaultReason::TooManyArguments),
    }
}
