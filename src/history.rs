//! Build history filtering and ordering
//!
//! Reduces the raw upstream build list to the subset that can be compared
//! against the release being published, ordered so the head of the result is
//! always the newest known build.

use crate::domain::{BuildRecord, Version};

/// Which historical builds are considered comparable to the release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every successful tagged build, regardless of version line
    #[default]
    AllReleases,
    /// Only builds sharing the release's major.minor line
    SameMinorLine,
}

/// A successful historical build with a parseable version tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparableBuild {
    pub version: Version,
    pub build_number: u64,
}

/// Select the builds comparable to `reference`, newest first
///
/// A record is included iff its status is the success marker and its tag is
/// present and parses as a semantic version; malformed tags are silently
/// excluded. Results are ordered descending by version precedence, with the
/// build number as a descending tie-break for duplicate or re-run tags.
///
/// An input that filters down to nothing yields an empty vector, not an
/// error.
pub fn select_comparable_builds(
    history: &[BuildRecord],
    reference: &Version,
    mode: FilterMode,
) -> Vec<ComparableBuild> {
    let mut builds: Vec<ComparableBuild> = history
        .iter()
        .filter(|record| record.is_success())
        .filter_map(|record| {
            let tag = record.tag.as_deref()?;
            let version = Version::parse(tag).ok()?;
            Some(ComparableBuild {
                version,
                build_number: record.build_number,
            })
        })
        .filter(|build| match mode {
            FilterMode::AllReleases => true,
            FilterMode::SameMinorLine => reference.same_minor_line(&build.version),
        })
        .collect();

    builds.sort_by(|a, b| {
        b.version
            .cmp(&a.version)
            .then(b.build_number.cmp(&a.build_number))
    });

    builds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: Option<&str>, status: &str, build_number: u64) -> BuildRecord {
        BuildRecord {
            tag: tag.map(|t| t.to_string()),
            status_text: status.to_string(),
            build_number,
        }
    }

    #[test]
    fn test_excludes_non_success_records() {
        let history = vec![
            record(Some("v1.0.0"), "success", 1),
            record(Some("v1.0.1"), "error", 2),
            record(Some("v1.0.2"), "aborted", 3),
        ];
        let reference = Version::new(1, 0, 3);

        let builds = select_comparable_builds(&history, &reference, FilterMode::AllReleases);
        assert_eq!(builds.len(), 1);
        assert_eq!(builds[0].version, Version::new(1, 0, 0));
    }

    #[test]
    fn test_excludes_absent_and_malformed_tags() {
        let history = vec![
            record(None, "success", 1),
            record(Some("bad"), "success", 2),
            record(Some("v1.0.0"), "success", 3),
        ];
        let reference = Version::new(1, 0, 1);

        let builds = select_comparable_builds(&history, &reference, FilterMode::AllReleases);
        assert_eq!(builds.len(), 1);
        assert_eq!(builds[0].build_number, 3);
    }

    #[test]
    fn test_orders_descending_by_version() {
        let history = vec![
            record(Some("v1.2.0"), "success", 10),
            record(Some("v1.2.2"), "success", 12),
            record(Some("v1.2.1"), "success", 11),
        ];
        let reference = Version::new(1, 2, 3);

        let builds = select_comparable_builds(&history, &reference, FilterMode::AllReleases);
        let versions: Vec<String> = builds.iter().map(|b| b.version.to_string()).collect();
        assert_eq!(versions, vec!["1.2.2", "1.2.1", "1.2.0"]);
    }

    #[test]
    fn test_build_number_breaks_version_ties() {
        // Re-run of the same tag: higher build number wins the head position
        let history = vec![
            record(Some("v1.2.0"), "success", 10),
            record(Some("v1.2.0"), "success", 14),
            record(Some("v1.2.0"), "success", 12),
        ];
        let reference = Version::new(1, 2, 1);

        let builds = select_comparable_builds(&history, &reference, FilterMode::AllReleases);
        let numbers: Vec<u64> = builds.iter().map(|b| b.build_number).collect();
        assert_eq!(numbers, vec![14, 12, 10]);
    }

    #[test]
    fn test_prerelease_orders_below_production() {
        let history = vec![
            record(Some("v1.2.1-beta.1"), "success", 11),
            record(Some("v1.2.1"), "success", 12),
        ];
        let reference = Version::new(1, 2, 2);

        let builds = select_comparable_builds(&history, &reference, FilterMode::AllReleases);
        assert_eq!(builds[0].version, Version::new(1, 2, 1));
        assert!(builds[1].version.is_prerelease());
    }

    #[test]
    fn test_same_minor_line_mode() {
        let history = vec![
            record(Some("v1.2.0"), "success", 1),
            record(Some("v1.3.0"), "success", 2),
            record(Some("v2.2.0"), "success", 3),
        ];
        let reference = Version::new(1, 2, 1);

        let builds = select_comparable_builds(&history, &reference, FilterMode::SameMinorLine);
        assert_eq!(builds.len(), 1);
        assert_eq!(builds[0].version, Version::new(1, 2, 0));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let reference = Version::new(1, 0, 0);
        assert!(select_comparable_builds(&[], &reference, FilterMode::AllReleases).is_empty());
    }

    #[test]
    fn test_everything_filtered_yields_empty_output() {
        let history = vec![record(Some("not-a-version"), "error", 1)];
        let reference = Version::new(1, 0, 0);
        assert!(
            select_comparable_builds(&history, &reference, FilterMode::AllReleases).is_empty()
        );
    }

    #[test]
    fn test_default_mode_is_unrestricted() {
        assert_eq!(FilterMode::default(), FilterMode::AllReleases);
    }
}
