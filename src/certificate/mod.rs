//! Certificate handling module
//!
//! This module provides functionality for:
//! - Finding the PEM block embedded in a feed entry
//! - Parsing that block into a report record

pub mod extract;
pub mod parse;

pub use extract::extract_certificate;
pub use parse::parse_certificate;
