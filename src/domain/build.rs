use serde::Deserialize;

/// Status text the build-tracking service reports for a finished, successful build
pub const SUCCESS_STATUS: &str = "success";

/// One historical build as reported by the build-tracking service
///
/// Received verbatim from the upstream API and never mutated; the history
/// filter only takes views over these records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildRecord {
    /// Git tag the build was triggered from, if any
    #[serde(default)]
    pub tag: Option<String>,

    /// Human-readable build status (e.g. "success", "error", "aborted")
    pub status_text: String,

    /// Monotonically increasing build identifier assigned by the service
    pub build_number: u64,
}

impl BuildRecord {
    /// Whether the service reported this build as successful
    pub fn is_success(&self) -> bool {
        self.status_text == SUCCESS_STATUS
    }
}
