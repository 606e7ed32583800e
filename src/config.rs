//! Pipeline configuration
//!
//! All inputs arrive through pipeline environment variables. They are read
//! and validated once at process start into an explicit [Config]; every
//! required value is checked before any network or file activity happens.

use std::collections::HashMap;

use crate::error::{ReleaseGateError, Result};

/// Complete validated configuration for one release-gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication token for the build-tracking service
    pub api_token: String,

    /// Application identifier at the build-tracking service
    pub app_slug: String,

    /// Git tag of the release being published
    pub release_tag: String,

    /// Display name of the application, used in the notes page and filename
    pub app_name: String,

    /// Commit hash shown on the release-notes page
    pub commit_hash: Option<String>,

    /// Commit message shown on the release-notes page
    pub commit_message: Option<String>,

    /// URL to the iOS build artifact, if one was uploaded
    pub ios_artifact_url: Option<String>,

    /// URL to the Android build artifact, if one was uploaded
    pub android_artifact_url: Option<String>,

    /// Icon URL shown on the release-notes page
    pub icon_url: Option<String>,

    /// Log would-be variable exports instead of running the real exporter.
    /// Set in any non-CI environment.
    pub log_only_export: bool,
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    ///
    /// # Arguments
    /// * `vars` - Key/value pairs, typically `std::env::vars()`
    ///
    /// # Returns
    /// * `Ok(Config)` - All required values present and non-blank
    /// * `Err` - `Config` error naming the first missing value
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        Ok(Config {
            api_token: required(&vars, "BITRISE_API_TKN")?,
            app_slug: required(&vars, "BITRISE_APP_SLUG")?,
            release_tag: required(&vars, "BITRISE_GIT_TAG")?,
            app_name: required(&vars, "APP_NAME")?,
            commit_hash: optional(&vars, "BITRISE_GIT_COMMIT"),
            commit_message: optional(&vars, "BITRISE_GIT_MESSAGE"),
            ios_artifact_url: optional(&vars, "S3_DEPLOY_STEP_EMAIL_READY_URL"),
            android_artifact_url: optional(&vars, "S3_UPLOAD_STEP_URL"),
            icon_url: optional(&vars, "SLACK_MSG_ICON"),
            log_only_export: flag(&vars, "DISABLE_REAL_ENVMAN"),
        })
    }
}

fn required(vars: &HashMap<String, String>, key: &str) -> Result<String> {
    match vars.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ReleaseGateError::config(format!("{} not set", key))),
    }
}

fn optional(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

fn flag(vars: &HashMap<String, String>, key: &str) -> bool {
    match vars.get(key).map(|v| v.trim().to_lowercase()) {
        Some(value) => !value.is_empty() && value != "0" && value != "false",
        None => false,
    }
}
