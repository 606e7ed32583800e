//! Release promotion decision
//!
//! Decides whether the release being published should be promoted to the
//! "latest" slot: prereleases never are, the first-ever successful release
//! always is, and otherwise the release must rank at least as high as the
//! newest comparable build on record.

use serde_json::Value;

use crate::domain::{BuildRecord, Version};
use crate::error::{ReleaseGateError, Result};
use crate::history::{self, FilterMode};

/// Outcome of the promotion decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub is_prerelease: bool,
    pub should_promote: bool,
}

impl ReleaseDecision {
    /// Evaluate the promotion decision against a raw build-history payload
    ///
    /// The payload is sanity-checked before any filtering: a missing `data`
    /// list, or a first record without a `build_number`, indicates the
    /// upstream API contract has changed shape and fails with
    /// `UpstreamData`. Individually malformed records past that check are
    /// tolerated by exclusion.
    pub fn evaluate(reference: &Version, payload: &Value, mode: FilterMode) -> Result<Self> {
        let records = parse_history_payload(payload)?;
        Ok(ReleaseDecision {
            is_prerelease: reference.is_prerelease(),
            should_promote: decide(reference, &records, mode),
        })
    }
}

/// Validate the upstream payload shape and extract its build records
///
/// Expected shape: `{ "data": [ { "status_text": ..., "tag": ...,
/// "build_number": ... }, ... ] }`. Records that fail to deserialize after
/// the shape check are dropped, not fatal.
pub fn parse_history_payload(payload: &Value) -> Result<Vec<BuildRecord>> {
    let data = payload
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ReleaseGateError::upstream_data("missing 'data' list in build history response")
        })?;

    if let Some(first) = data.first() {
        if first.get("build_number").and_then(Value::as_u64).is_none() {
            return Err(ReleaseGateError::upstream_data(
                "first record has no 'build_number', the build service API may have changed",
            ));
        }
    }

    Ok(data
        .iter()
        .filter_map(|record| serde_json::from_value(record.clone()).ok())
        .collect())
}

/// Decide promotion from already-validated build records
///
/// Returns true iff `reference` is a production version and no comparable
/// historical build outranks it.
pub fn decide(reference: &Version, records: &[BuildRecord], mode: FilterMode) -> bool {
    if reference.is_prerelease() {
        return false;
    }

    let builds = history::select_comparable_builds(records, reference, mode);
    match builds.first() {
        Some(head) => *reference >= head.version,
        None => true,
    }
}
