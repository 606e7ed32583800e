//! Target binary range calculation
//!
//! Tells the over-the-air update mechanism which previously-shipped binaries
//! may accept the bundle patch associated with a release. A binary only
//! receives patches released for its own or an earlier patch level within the
//! same minor line; a prerelease binary only receives the patch targeting the
//! immediately preceding prerelease build in its set.

use std::fmt;

use crate::domain::{Identifier, Version};
use crate::error::{ReleaseGateError, Result};

/// Version range of binaries eligible for the current update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetBinaryRange {
    /// Only a binary on exactly this version is eligible
    Exact(Version),
    /// Any binary in the half-open interval `[lower, upper)` is eligible
    Range { lower: Version, upper: Version },
}

impl TargetBinaryRange {
    /// Compute the eligible binary range for a release version
    ///
    /// Production releases widen to every earlier patch of the same minor
    /// line, except patch 0 which has no earlier patch and targets itself.
    /// Prerelease releases target the immediately preceding prerelease
    /// build, except index 0 which targets itself.
    ///
    /// # Returns
    /// * `Err` - `MalformedPrereleaseTag` when a prerelease sequence has no
    ///   numeric index to decrement (fewer than two identifiers, or a
    ///   non-numeric second identifier)
    pub fn compute(reference: &Version) -> Result<Self> {
        if reference.is_prerelease() {
            Self::compute_prerelease(reference)
        } else {
            Ok(Self::compute_production(reference))
        }
    }

    fn compute_prerelease(reference: &Version) -> Result<Self> {
        if reference.prerelease.len() < 2 {
            return Err(ReleaseGateError::malformed_prerelease(format!(
                "'{}' must look like v<maj>.<min>.<patch>-<set>.<index>, e.g. v1.2.3-beta.0",
                reference
            )));
        }

        let set = reference.prerelease[0].clone();
        let index = match reference.prerelease[1] {
            Identifier::Numeric(n) => n,
            Identifier::Alpha(_) => {
                return Err(ReleaseGateError::malformed_prerelease(format!(
                    "'{}' has no numeric prerelease index to decrement",
                    reference
                )));
            }
        };

        let target_index = index.saturating_sub(1);
        Ok(TargetBinaryRange::Exact(Version::with_prerelease(
            reference.major,
            reference.minor,
            reference.patch,
            vec![set, Identifier::Numeric(target_index)],
        )))
    }

    fn compute_production(reference: &Version) -> Self {
        let floor = Version::new(reference.major, reference.minor, 0);
        if reference.patch == 0 {
            TargetBinaryRange::Exact(floor)
        } else {
            TargetBinaryRange::Range {
                lower: floor,
                upper: Version::new(reference.major, reference.minor, reference.patch),
            }
        }
    }
}

/// Renders the range-expression grammar the update mechanism understands:
/// exact versions as `v1.2.3-beta.0`, ranges as `>=v1.2.0 <v1.2.3`.
impl fmt::Display for TargetBinaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetBinaryRange::Exact(version) => write!(f, "v{}", version),
            TargetBinaryRange::Range { lower, upper } => {
                write!(f, ">=v{} <v{}", lower, upper)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(tag: &str) -> Result<TargetBinaryRange> {
        TargetBinaryRange::compute(&Version::parse(tag).unwrap())
    }

    #[test]
    fn test_production_patch_zero_targets_itself() {
        let range = compute("v1.66.0").unwrap();
        assert_eq!(range, TargetBinaryRange::Exact(Version::new(1, 66, 0)));
        assert_eq!(range.to_string(), "v1.66.0");
    }

    #[test]
    fn test_production_patch_widens_to_minor_line() {
        let range = compute("v1.66.3").unwrap();
        assert_eq!(
            range,
            TargetBinaryRange::Range {
                lower: Version::new(1, 66, 0),
                upper: Version::new(1, 66, 3),
            }
        );
        assert_eq!(range.to_string(), ">=v1.66.0 <v1.66.3");
    }

    #[test]
    fn test_production_patch_one() {
        assert_eq!(compute("v1.66.1").unwrap().to_string(), ">=v1.66.0 <v1.66.1");
    }

    #[test]
    fn test_prerelease_targets_preceding_build() {
        let range = compute("v1.66.3-beta.3").unwrap();
        assert_eq!(
            range,
            TargetBinaryRange::Exact(Version::parse("v1.66.3-beta.2").unwrap())
        );
        assert_eq!(range.to_string(), "v1.66.3-beta.2");
    }

    #[test]
    fn test_prerelease_index_one_targets_zero() {
        assert_eq!(compute("v1.66.3-beta.1").unwrap().to_string(), "v1.66.3-beta.0");
    }

    #[test]
    fn test_prerelease_index_zero_targets_itself() {
        assert_eq!(compute("v1.66.3-beta.0").unwrap().to_string(), "v1.66.3-beta.0");
    }

    #[test]
    fn test_single_prerelease_identifier_rejected() {
        let err = compute("v1.66.3-beta").unwrap_err();
        assert!(matches!(err, ReleaseGateError::MalformedPrereleaseTag(_)));
    }

    #[test]
    fn test_non_numeric_prerelease_index_rejected() {
        let err = compute("v1.66.3-beta.nightly").unwrap_err();
        assert!(matches!(err, ReleaseGateError::MalformedPrereleaseTag(_)));
    }

    #[test]
    fn test_extra_prerelease_identifiers_use_first_two() {
        // Only the set and index participate in the target version
        assert_eq!(compute("v1.2.3-beta.4.extra").unwrap().to_string(), "v1.2.3-beta.3");
    }

    #[test]
    fn test_custom_prerelease_set() {
        assert_eq!(compute("v2.0.0-rc.5").unwrap().to_string(), "v2.0.0-rc.4");
    }
}
