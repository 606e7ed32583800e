use serde_json::{json, Value};

use crate::error::{ReleaseGateError, Result};
use crate::service::BuildService;

/// Mock build service for testing without network access
pub struct MockBuildService {
    payload: Option<Value>,
}

impl MockBuildService {
    /// Create a mock that fails every request
    pub fn new() -> Self {
        MockBuildService { payload: None }
    }

    /// Create a mock returning a fixed payload
    pub fn with_payload(payload: Value) -> Self {
        MockBuildService {
            payload: Some(payload),
        }
    }

    /// Create a mock returning a well-shaped history built from
    /// (tag, status, build_number) triples
    pub fn with_builds(builds: &[(Option<&str>, &str, u64)]) -> Self {
        let data: Vec<Value> = builds
            .iter()
            .map(|(tag, status, build_number)| {
                json!({
                    "tag": tag,
                    "status_text": status,
                    "build_number": build_number,
                })
            })
            .collect();
        Self::with_payload(json!({ "data": data }))
    }
}

impl Default for MockBuildService {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildService for MockBuildService {
    fn fetch_build_history(&self, _app_slug: &str) -> Result<Value> {
        self.payload
            .clone()
            .ok_or_else(|| ReleaseGateError::service("mock service has no payload"))
    }
}
