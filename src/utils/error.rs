//! Custom error types for ct-harvest
//!
//! Feed retrieval and report writing failures abort a run. Certificate
//! errors are per-entry and are handled by skipping the entry.

use thiserror::Error;

/// Top-level error type for the ct-harvest application
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Feed retrieval and decoding errors
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("invalid proxy URL {proxy}: {message}")]
    InvalidProxy { proxy: String, message: String },

    #[error("failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("failed to fetch the feed: {message}")]
    Transport { message: String },

    #[error("feed request timed out")]
    Timeout,

    #[error("failed to fetch the feed. status_code: {status}")]
    Status { status: u16 },

    #[error("failed to read response body: {message}")]
    Body { message: String },

    #[error("failed to decode feed XML: {message}")]
    Decode { message: String },

    #[error("failed to fetch feed after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<FeedError>,
    },
}

/// Per-entry certificate extraction and parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    #[error("no certificate found in the summary")]
    NotFound,

    #[error("failed to decode PEM block containing certificate: {message}")]
    NotCertificateBlock { message: String },

    #[error("failed to parse certificate: {message}")]
    Malformed { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Report export errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("Failed to serialize report: {message}")]
    Serialize { message: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_reports_attempts_and_cause() {
        let err = FeedError::Exhausted {
            attempts: 4,
            last: Box::new(FeedError::Status { status: 503 }),
        };
        assert_eq!(err.to_string(), "failed to fetch feed after 4 attempts");

        let cause = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(
            cause.as_deref(),
            Some("failed to fetch the feed. status_code: 503")
        );
    }

    #[test]
    fn test_feed_error_converts_to_toolkit_error() {
        let err: ToolkitError = FeedError::Timeout.into();
        assert!(matches!(err, ToolkitError::Feed(FeedError::Timeout)));
    }
}
