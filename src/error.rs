use thiserror::Error;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid release tag: {0}")]
    InvalidTag(String),

    #[error("Malformed prerelease tag: {0}")]
    MalformedPrereleaseTag(String),

    #[error("Unexpected build history payload: {0}")]
    UpstreamData(String),

    #[error("Build service request failed: {0}")]
    Service(String),

    #[error("Variable export failed: {0}")]
    Export(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

impl ReleaseGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }

    /// Create an invalid tag error with context
    pub fn invalid_tag(msg: impl Into<String>) -> Self {
        ReleaseGateError::InvalidTag(msg.into())
    }

    /// Create a malformed prerelease tag error with context
    pub fn malformed_prerelease(msg: impl Into<String>) -> Self {
        ReleaseGateError::MalformedPrereleaseTag(msg.into())
    }

    /// Create an upstream data error with context
    pub fn upstream_data(msg: impl Into<String>) -> Self {
        ReleaseGateError::UpstreamData(msg.into())
    }

    /// Create a build service error with context
    pub fn service(msg: impl Into<String>) -> Self {
        ReleaseGateError::Service(msg.into())
    }

    /// Create a variable export error with context
    pub fn export(msg: impl Into<String>) -> Self {
        ReleaseGateError::Export(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseGateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseGateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReleaseGateError::invalid_tag("test")
            .to_string()
            .contains("Invalid release tag"));
        assert!(ReleaseGateError::upstream_data("test")
            .to_string()
            .contains("build history"));
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            ReleaseGateError::config("config issue"),
            ReleaseGateError::invalid_tag("tag issue"),
            ReleaseGateError::malformed_prerelease("prerelease issue"),
            ReleaseGateError::upstream_data("payload issue"),
            ReleaseGateError::service("request issue"),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseGateError::config("x"), "Configuration error"),
            (ReleaseGateError::invalid_tag("x"), "Invalid release tag"),
            (
                ReleaseGateError::malformed_prerelease("x"),
                "Malformed prerelease tag",
            ),
            (
                ReleaseGateError::upstream_data("x"),
                "Unexpected build history payload",
            ),
            (
                ReleaseGateError::service("x"),
                "Build service request failed",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = ReleaseGateError::invalid_tag(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Invalid release tag"));
        }
    }
}
