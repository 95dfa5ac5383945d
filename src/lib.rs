#![forbid(unsafe_code)]

//! cmakemin: raise the cmake_minimum_required version in a CMakeLists.txt
//!
//! cmakemin rewrites the first uncommented `cmake_minimum_required(VERSION ...)`
//! invocation in the working directory's CMakeLists.txt to a target version,
//! but only when the declared version is lower. When the replacement fits the
//! original line it is padded with spaces and only the file prefix is
//! rewritten, leaving the rest of the file's bytes untouched on disk.

pub mod cli;
pub mod error;
pub mod output;
pub mod patcher;
pub mod types;

// Re-export error type for convenient access
pub use error::PatchError;

// Re-export core domain types for convenient access
pub use patcher::{PatchPlan, RewriteStrategy};
pub use types::{DEFAULT_TARGET, Version};
