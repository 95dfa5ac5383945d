//! Line scanning for the cmake_minimum_required command
//!
//! One regex does the locating, extracting, and template work. The match is
//! case-sensitive: a lower-case `version` keyword is not recognized, which
//! mirrors how CMake listfiles are conventionally written.

use crate::types::Version;
use regex::Regex;
use std::sync::LazyLock;

/// Pattern for an uncommented `cmake_minimum_required(VERSION ...)` call
///
/// Capture groups:
/// 1. prefix: the command name through `VERSION` and the whitespace after it
/// 2. major (required)
/// 3. minor (required)
/// 4. patch (optional; absent means 0)
/// 5. remainder: everything up to and including the last `)` on the line
pub const COMMAND_PATTERN: &str =
    r"(cmake_minimum_required\s*\(\s*VERSION\s+)(\d+)\.(\d+)(?:\.(\d+))?(.*\))";

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMAND_PATTERN).expect("command pattern must compile"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// A matched command invocation within a single line
#[derive(Debug)]
pub struct CommandMatch<'a> {
    line: &'a str,
    start: usize,
    end: usize,
    prefix: &'a str,
    remainder: &'a str,
    /// The version the line currently declares
    pub current: Version,
}

impl<'a> CommandMatch<'a> {
    /// Finds the command invocation in a line, if there is an uncommented one
    ///
    /// Returns None when the line does not contain the command, when the
    /// text before the command starts with a `#` comment marker, or when a
    /// version component does not fit in u32.
    pub fn find(line: &'a str) -> Option<Self> {
        let caps = COMMAND_RE.captures(line)?;
        let whole = caps.get(0)?;

        // A commented-out invocation is left alone.
        if line[..whole.start()].trim_start().starts_with('#') {
            return None;
        }

        let major = caps.get(2)?.as_str().parse().ok()?;
        let minor = caps.get(3)?.as_str().parse().ok()?;
        let patch = match caps.get(4) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };

        Some(CommandMatch {
            line,
            start: whole.start(),
            end: whole.end(),
            prefix: caps.get(1)?.as_str(),
            remainder: caps.get(5)?.as_str(),
            current: Version::new(major, minor, patch),
        })
    }

    /// Builds the line as it should read with `target` substituted in
    ///
    /// Internal whitespace runs in the command text are collapsed to single
    /// spaces so the replacement is as short as possible, which improves the
    /// odds that it fits within the original line's byte length. Text on
    /// the line outside the matched span is preserved verbatim.
    pub fn rebuilt(&self, target: Version) -> String {
        let remainder = self.remainder.trim();
        // No separator when the version was the last argument, so the
        // rebuilt call closes as `3.10.0)` rather than `3.10.0 )`.
        let sep = if remainder.starts_with(')') { "" } else { " " };
        let command = format!("{}{}{}{}", self.prefix, target, sep, remainder);
        let command = WHITESPACE_RUN_RE.replace_all(&command, " ");
        format!(
            "{}{}{}",
            &self.line[..self.start],
            command,
            &self.line[self.end..]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_plain_invocation() {
        let m = CommandMatch::find("cmake_minimum_required(VERSION 3.0)").unwrap();
        assert_eq!(m.current, Version::new(3, 0, 0));
    }

    #[test]
    fn test_find_full_triple() {
        let m = CommandMatch::find("cmake_minimum_required(VERSION 3.20.1)").unwrap();
        assert_eq!(m.current, Version::new(3, 20, 1));
    }

    #[test]
    fn test_find_tolerates_extra_whitespace() {
        let m = CommandMatch::find("cmake_minimum_required  ( VERSION   2.8.12 )").unwrap();
        assert_eq!(m.current, Version::new(2, 8, 12));
    }

    #[test]
    fn test_find_with_leading_indentation() {
        let m = CommandMatch::find("    cmake_minimum_required(VERSION 3.1)").unwrap();
        assert_eq!(m.current, Version::new(3, 1, 0));
    }

    #[test]
    fn test_commented_invocation_is_skipped() {
        assert!(CommandMatch::find("# cmake_minimum_required(VERSION 3.0)").is_none());
        assert!(CommandMatch::find("  #cmake_minimum_required(VERSION 3.0)").is_none());
    }

    #[test]
    fn test_non_matching_lines() {
        assert!(CommandMatch::find("project(Foo)").is_none());
        assert!(CommandMatch::find("").is_none());
        // Case-sensitive on the VERSION keyword, a documented limitation.
        assert!(CommandMatch::find("cmake_minimum_required(version 3.0)").is_none());
    }

    #[test]
    fn test_rebuilt_substitutes_target() {
        let m = CommandMatch::find("cmake_minimum_required(VERSION 3.0)").unwrap();
        assert_eq!(
            m.rebuilt(Version::new(3, 10, 0)),
            "cmake_minimum_required(VERSION 3.10.0)"
        );
    }

    #[test]
    fn test_rebuilt_collapses_whitespace() {
        let m = CommandMatch::find("cmake_minimum_required   (  VERSION   2.8.12   )").unwrap();
        assert_eq!(
            m.rebuilt(Version::new(3, 5, 0)),
            "cmake_minimum_required ( VERSION 3.5.0)"
        );
    }

    #[test]
    fn test_rebuilt_preserves_indentation_and_trailing_text() {
        let m = CommandMatch::find("  cmake_minimum_required(VERSION 3.0) # old").unwrap();
        assert_eq!(
            m.rebuilt(Version::new(3, 10, 0)),
            "  cmake_minimum_required(VERSION 3.10.0) # old"
        );
    }

    #[test]
    fn test_rebuilt_keeps_fatal_error_argument() {
        let m = CommandMatch::find("cmake_minimum_required(VERSION 2.6 FATAL_ERROR)").unwrap();
        assert_eq!(
            m.rebuilt(Version::new(3, 5, 0)),
            "cmake_minimum_required(VERSION 3.5.0 FATAL_ERROR)"
        );
    }
}
