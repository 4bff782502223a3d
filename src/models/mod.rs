//! Data models for ct-harvest
//!
//! This module contains all the data structures used throughout the application.

pub mod certificate;
pub mod feed;
pub mod query_result;

pub use certificate::Certificate;
pub use feed::{AtomFeed, FeedEntry};
pub use query_result::QueryResult;
