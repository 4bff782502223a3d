//! Certificate Transparency search feed integration
//!
//! This module builds feed query URLs, retrieves the feed with retries, and
//! decodes the Atom envelope into entries.

pub mod atom;
pub mod client;
pub mod url;

pub use atom::parse_feed;
pub use client::{FeedClient, FeedSource, HttpFeedSource};
pub use url::{attempt_url, build_feed_url};
