//! Build-tracking service abstraction
//!
//! The promotion decision needs the history of prior builds from the
//! build-tracking service. This module provides a trait-based seam over that
//! dependency so the pipeline can run against a real HTTP client or a mock:
//!
//! - [http::HttpBuildService]: real client using the `ureq` crate
//! - [mock::MockBuildService]: canned-payload implementation for testing
//!
//! Implementations return the raw JSON payload; shape validation belongs to
//! [crate::promotion], which owns the upstream data contract.

pub mod http;
pub mod mock;

pub use http::HttpBuildService;
pub use mock::MockBuildService;

use crate::error::Result;

/// Client for the build-tracking service
///
/// Implementors must be `Send + Sync` so the pipeline can be exercised from
/// parallel test harnesses without coordination.
pub trait BuildService: Send + Sync {
    /// Fetch the full build history for an application
    ///
    /// # Arguments
    /// * `app_slug` - Application identifier at the service
    ///
    /// # Returns
    /// * `Ok(Value)` - Raw response payload, unvalidated
    /// * `Err` - `Service` error if the request or decoding fails
    fn fetch_build_history(&self, app_slug: &str) -> Result<serde_json::Value>;
}
