//! Utility modules for ct-harvest
//!
//! This module contains error types, progress indicators, and other utilities.

pub mod error;
pub mod progress;

pub use error::{
    CertificateError, ConfigError, FeedError, ReportError, Result, ToolkitError,
};
