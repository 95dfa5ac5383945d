//! The scan/compare/rewrite engine
//!
//! Planning is a pure function over the file's content, so both rewrite
//! strategies are unit-testable without touching the file system. The file
//! is rewritten with a seek-to-start overwrite rather than a truncate:
//! under the Prefix strategy only the leading bytes up through the command
//! line are written, because every byte after them is already correct at
//! its current offset.

pub mod scanner;

use crate::error::PatchError;
use crate::patcher::scanner::CommandMatch;
use crate::types::Version;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Name of the listfile this tool operates on, in the working directory
pub const LISTFILE_NAME: &str = "CMakeLists.txt";

/// Which portion of the file a rewrite touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStrategy {
    /// The replacement fits the original line's byte length (after space
    /// padding), so only the file prefix up through that line is rewritten
    Prefix,
    /// The replacement is longer than the original line, so the whole file
    /// content is rewritten
    Full,
}

/// Outcome of planning a patch against file content
#[derive(Debug, PartialEq, Eq)]
pub enum PatchPlan {
    /// The declared version already meets the target; nothing to write
    AlreadySatisfied {
        /// The version the file declares
        current: Version,
    },
    /// The file needs patching
    Rewrite {
        /// The version the file declared before patching
        current: Version,
        strategy: RewriteStrategy,
        /// Bytes to write at offset 0
        buffer: String,
        /// How many lines the buffer covers
        lines_rewritten: usize,
    },
}

/// Plans the patch for `content`, without performing any I/O
///
/// Scans line by line for the first uncommented
/// `cmake_minimum_required(VERSION ...)` invocation, compares its version
/// to `target`, and constructs the write buffer for whichever rewrite
/// strategy applies. Content is split and joined on `\n`, which round-trips
/// every byte outside the patched line, including a trailing newline if the
/// file has one.
///
/// # Errors
///
/// Returns `PatchError::CommandNotFound` if no uncommented invocation
/// exists in the content.
pub fn plan_patch(content: &str, target: Version) -> Result<PatchPlan, PatchError> {
    let lines: Vec<&str> = content.split('\n').collect();

    for (idx, line) in lines.iter().enumerate() {
        let Some(found) = CommandMatch::find(line) else {
            continue;
        };

        let current = found.current;
        if current >= target {
            return Ok(PatchPlan::AlreadySatisfied { current });
        }

        let replacement = found.rebuilt(target);
        if replacement.len() <= line.len() {
            // Pad to the original byte length so every byte after the
            // command line keeps its offset and can stay on disk untouched.
            let mut padded = replacement;
            padded.push_str(&" ".repeat(line.len() - padded.len()));

            let mut parts: Vec<&str> = lines[..idx].to_vec();
            parts.push(&padded);
            return Ok(PatchPlan::Rewrite {
                current,
                strategy: RewriteStrategy::Prefix,
                buffer: parts.join("\n"),
                lines_rewritten: idx + 1,
            });
        }

        let mut parts: Vec<&str> = lines[..idx].to_vec();
        parts.push(&replacement);
        parts.extend_from_slice(&lines[idx + 1..]);
        return Ok(PatchPlan::Rewrite {
            current,
            strategy: RewriteStrategy::Full,
            buffer: parts.join("\n"),
            lines_rewritten: lines.len(),
        });
    }

    Err(PatchError::CommandNotFound)
}

/// Patches the listfile at `path` in place, raising its declared version
/// to `target` if it is currently lower
///
/// The file is opened once in read/write mode and closed on every exit
/// path. When no write is needed the file bytes are left exactly as they
/// were.
///
/// # Errors
///
/// Returns `PatchError::Open` if the file cannot be opened,
/// `PatchError::CommandNotFound` if it holds no uncommented invocation,
/// and `PatchError::Io` for read/write failures.
pub fn patch_file(path: &Path, target: Version) -> Result<PatchPlan, PatchError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| PatchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    let plan = plan_patch(&content, target)?;
    if let PatchPlan::Rewrite { ref buffer, .. } = plan {
        file.seek(SeekFrom::Start(0))?;
        file.write_all(buffer.as_bytes())?;
        file.flush()?;
    }

    Ok(plan)
}
