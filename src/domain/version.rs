//! Semantic version parsing and precedence
//!
//! Versions are parsed once from a release tag and never mutated. Precedence
//! follows semver.org: major, minor, patch, then prerelease identifiers
//! compared element-wise, with a production version (empty prerelease)
//! ranking above any prerelease of the same core.

use crate::error::{ReleaseGateError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single dot-separated prerelease identifier
///
/// Numeric identifiers compare numerically and always sort before
/// alphanumeric identifiers at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Identifier {
    Numeric(u64),
    Alpha(String),
}

impl Identifier {
    /// Parse one prerelease identifier (e.g. "beta" or "3")
    ///
    /// Numeric identifiers must not carry leading zeroes; alphanumeric
    /// identifiers may contain ASCII letters, digits, and hyphens.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ReleaseGateError::invalid_tag(
                "empty prerelease identifier",
            ));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(ReleaseGateError::invalid_tag(format!(
                    "numeric prerelease identifier has leading zero: '{}'",
                    s
                )));
            }
            let n = s.parse::<u64>().map_err(|_| {
                ReleaseGateError::invalid_tag(format!(
                    "numeric prerelease identifier out of range: '{}'",
                    s
                ))
            })?;
            return Ok(Identifier::Numeric(n));
        }

        if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Ok(Identifier::Alpha(s.to_string()))
        } else {
            Err(ReleaseGateError::invalid_tag(format!(
                "invalid prerelease identifier: '{}'",
                s
            )))
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alpha(s) => write!(f, "{}", s),
        }
    }
}

/// Semantic version representation
///
/// An empty prerelease sequence means a production release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
}

impl Version {
    /// Create a new production version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
        }
    }

    /// Create a version with a prerelease identifier sequence
    pub fn with_prerelease(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<Identifier>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
        }
    }

    /// Parse a version from a tag string (e.g. "v1.2.3-beta.0")
    ///
    /// Accepts an optional 'v' or 'V' prefix. The core must be three
    /// dot-separated numeric components without leading zeroes, optionally
    /// followed by '-' and a dot-separated prerelease sequence.
    ///
    /// # Arguments
    /// * `tag` - Tag string to parse
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed version
    /// * `Err` - `InvalidTag` if the string is not a well-formed semver tag
    pub fn parse(tag: &str) -> Result<Self> {
        let stripped = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        let (core, prerelease_part) = match stripped.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (stripped, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseGateError::invalid_tag(format!(
                "'{}' - expected X.Y.Z with optional prerelease",
                tag
            )));
        }

        let major = parse_core_component(parts[0], "major", tag)?;
        let minor = parse_core_component(parts[1], "minor", tag)?;
        let patch = parse_core_component(parts[2], "patch", tag)?;

        let prerelease = match prerelease_part {
            Some(pre) => pre
                .split('.')
                .map(Identifier::parse)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// Canonical form of a tag without the 'v' prefix (e.g. "1.2.3-beta.0")
    pub fn clean(tag: &str) -> Result<String> {
        Ok(Version::parse(tag)?.to_string())
    }

    /// Whether this version carries a prerelease sequence
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Whether another version shares this version's major.minor line
    pub fn same_minor_line(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

fn parse_core_component(part: &str, name: &str, tag: &str) -> Result<u64> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(ReleaseGateError::invalid_tag(format!(
            "invalid {} version in '{}': '{}'",
            name, tag, part
        )));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(ReleaseGateError::invalid_tag(format!(
            "{} version has leading zero in '{}': '{}'",
            name, tag, part
        )));
    }
    part.parse::<u64>().map_err(|_| {
        ReleaseGateError::invalid_tag(format!("invalid {} version in '{}': '{}'", name, tag, part))
    })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prerelease precedence: empty ranks above non-empty; otherwise compare
/// identifiers element-wise, with the shorter sequence ranking lower when it
/// is a prefix of the longer one.
fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, id) in self.prerelease.iter().enumerate() {
            if i == 0 {
                write!(f, "-{}", id)?;
            } else {
                write!(f, ".{}", id)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ReleaseGateError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
