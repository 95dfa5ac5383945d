//! Error types for cmakemin
//!
//! A single flat error enum covers the whole tool: the listfile may be
//! missing or unreadable, or the command the tool exists to rewrite may not
//! be present in it.

use std::path::PathBuf;

/// Top-level error type for cmakemin
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The listfile could not be opened (most likely it does not exist)
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No uncommented cmake_minimum_required(VERSION ...) line was found
    #[error(
        "The command 'cmake_minimum_required' was not found in CMakeLists.txt.\n\
         The search is regex-based, so the command may be present in a form \
         the pattern does not recognize."
    )]
    CommandNotFound,

    /// I/O error while reading or rewriting the listfile
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
