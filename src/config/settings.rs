//! Application settings configuration
//!
//! Defines the CT feed endpoint, retry policy, and other runtime configuration.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default CT log search host
pub const DEFAULT_FEED_HOST: &str = "https://crt.sh";

/// Feed retrieval settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Scheme and host of the CT log search service
    pub base_url: String,
    /// Retries after the first attempt
    pub retries: u32,
    pub retry_delay_secs: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_HOST.to_string(),
            retries: 3,
            retry_delay_secs: 5,
            timeout_secs: 60,
            user_agent: concat!("ct-harvest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_match() -> String {
    "LIKE".to_string()
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub feed: FeedSettings,
    /// Match mode used when none is given on the command line
    #[serde(default = "default_match")]
    pub default_match: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed: FeedSettings::default(),
            default_match: default_match(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base = self.feed.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "feed.base_url".to_string(),
                message: format!("expected an http(s) URL, got '{}'", self.feed.base_url),
            });
        }
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "feed.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
