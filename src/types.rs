#![forbid(unsafe_code)]

//! Core domain types for cmakemin
//!
//! This module defines the version triple the whole tool revolves around,
//! along with the pattern used to parse one from text.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Pattern for a bare version string: `major.minor[.patch]`
///
/// Capture groups:
/// 1. major (required)
/// 2. minor (required)
/// 3. patch (optional; absent means 0)
pub const VERSION_PATTERN: &str = r"(\d+)\.(\d+)(?:\.(\d+))?";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{VERSION_PATTERN}$")).expect("version pattern must compile")
});

/// A CMake version triple, ordered lexicographically by (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Fallback target when no usable version argument is supplied
pub const DEFAULT_TARGET: Version = Version::new(3, 5, 0);

impl Version {
    /// Creates a version from its three components
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a `major.minor[.patch]` string, with patch defaulting to 0
    ///
    /// Returns None if the input does not match the pattern exactly, or if
    /// a component overflows u32.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(input)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Version::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
