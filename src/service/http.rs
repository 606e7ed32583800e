use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::error::{ReleaseGateError, Result};
use crate::service::BuildService;

/// Base URL of the Bitrise REST API
pub const DEFAULT_BASE_URL: &str = "https://api.bitrise.io/v0.1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Real build-service client over HTTP
///
/// Authenticates with a personal access token in the `Authorization` header,
/// the scheme the Bitrise API expects.
pub struct HttpBuildService {
    agent: Agent,
    base_url: String,
    api_token: String,
}

impl HttpBuildService {
    /// Create a client against the default API endpoint
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();

        HttpBuildService {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }
}

impl BuildService for HttpBuildService {
    fn fetch_build_history(&self, app_slug: &str) -> Result<Value> {
        let url = format!("{}/apps/{}/builds", self.base_url, app_slug);

        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", &format!("token {}", self.api_token))
            .call()
            .map_err(|e| {
                ReleaseGateError::service(format!("GET {} failed: {}", url, e))
            })?;

        response.body_mut().read_json::<Value>().map_err(|e| {
            ReleaseGateError::service(format!("could not decode build history response: {}", e))
        })
    }
}
