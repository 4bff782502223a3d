//! Configuration module for ct-harvest
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{FeedSettings, Settings, DEFAULT_FEED_HOST};
