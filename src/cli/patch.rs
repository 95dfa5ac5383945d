//! Patch command implementation
//!
//! Resolves the target version from the positional arguments, runs the
//! patcher against ./CMakeLists.txt, reports the outcome, and maps it to an
//! exit code.

use crate::cli::args::{ColorChoice, DefaultReason, TargetResolution, resolve_target};
use crate::output::Diagnostics;
use crate::patcher::{self, LISTFILE_NAME, PatchPlan, RewriteStrategy};
use crate::types::DEFAULT_TARGET;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Run the patch operation
///
/// # Returns
///
/// Exit code:
/// - 0: Success, including the already-up-to-date no-op
/// - 2: Error (no command found, file missing/unreadable, I/O failure)
pub fn run_patch(versions: &[String], color: ColorChoice) -> i32 {
    let mut diag = Diagnostics::new(color);

    let target = match resolve_target(versions) {
        TargetResolution::Explicit(version) => version,
        TargetResolution::Defaulted(reason) => {
            match reason {
                DefaultReason::NoArgument => diag.info(&format!(
                    "No version argument provided. Defaulting to {DEFAULT_TARGET}."
                )),
                DefaultReason::Malformed(arg) => diag.warn(&format!(
                    "Version argument '{arg}' is not of the form major.minor[.patch]. \
                     Defaulting to {DEFAULT_TARGET}."
                )),
                DefaultReason::TooManyArguments => diag.warn(&format!(
                    "Too many arguments. cmakemin takes a single version number of the \
                     form major.minor[.patch]. Defaulting to {DEFAULT_TARGET}."
                )),
            }
            DEFAULT_TARGET
        }
    };

    diag.info(&format!("Target version: {target}."));

    match patcher::patch_file(Path::new(LISTFILE_NAME), target) {
        Ok(PatchPlan::AlreadySatisfied { current }) => {
            diag.info(&format!(
                "Current CMake version ({current}) is not less than the target ({target}). \
                 No changes made."
            ));
            EXIT_SUCCESS
        }
        Ok(PatchPlan::Rewrite {
            current,
            strategy,
            lines_rewritten,
            ..
        }) => {
            match strategy {
                RewriteStrategy::Prefix => diag.info(&format!(
                    "Only the first {lines_rewritten} line(s) needed rewriting."
                )),
                RewriteStrategy::Full => {
                    diag.info("A smaller patch was not possible. The whole file was rewritten.")
                }
            }
            diag.info(&format!(
                "{LISTFILE_NAME} has been patched: {current} -> {target}."
            ));
            EXIT_SUCCESS
        }
        Err(e) => {
            diag.error(&e.to_string());
            EXIT_ERROR
        }
    }
}
