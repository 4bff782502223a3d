//! CT search feed retrieval with retries
//!
//! A [`FeedSource`] performs one HTTP GET. [`FeedClient`] owns the retry
//! policy: a fixed delay between attempts, and query modifiers that narrow
//! the result set on later attempts.

use crate::config::FeedSettings;
use crate::ct::atom::parse_feed;
use crate::ct::url::attempt_url;
use crate::models::AtomFeed;
use crate::runner::PipelineEvent;
use crate::utils::FeedError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Something that can fetch a feed body by URL
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the body at `url`. Anything other than HTTP 200 is an error.
    async fn fetch(&self, url: &str) -> Result<String, FeedError>;
}

/// HTTP feed source backed by reqwest
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    /// Build a source, optionally routed through a proxy.
    ///
    /// Proxied clients accept any TLS certificate so intercepting proxies
    /// work. Direct clients verify certificates normally.
    pub fn new(settings: &FeedSettings, proxy: Option<&str>) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str());

        if let Some(proxy_url) = proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| FeedError::InvalidProxy {
                proxy: proxy_url.to_string(),
                message: e.to_string(),
            })?;
            builder = builder.proxy(proxy).danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| FeedError::ClientBuild {
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout
            } else {
                FeedError::Transport {
                    message: e.to_string(),
                }
            }
        })?;

        if response.status() != StatusCode::OK {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| FeedError::Body {
            message: e.to_string(),
        })
    }
}

/// Feed client applying the retry policy over a [`FeedSource`]
pub struct FeedClient<S> {
    source: S,
    retries: u32,
    retry_delay: Duration,
}

impl FeedClient<HttpFeedSource> {
    /// Create an HTTP-backed client from settings
    pub fn from_settings(settings: &FeedSettings, proxy: Option<&str>) -> Result<Self, FeedError> {
        let source = HttpFeedSource::new(settings, proxy)?;
        Ok(Self::new(source, settings.retries, settings.retry_delay()))
    }
}

impl<S: FeedSource> FeedClient<S> {
    pub fn new(source: S, retries: u32, retry_delay: Duration) -> Self {
        Self {
            source,
            retries,
            retry_delay,
        }
    }

    /// Total number of attempts this client makes
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Fetch and decode the feed once
    pub async fn fetch_feed(&self, url: &str) -> Result<AtomFeed, FeedError> {
        let body = self.source.fetch(url).await?;
        parse_feed(&body)
    }

    /// Fetch the feed, retrying up to `retries` more times.
    ///
    /// The delay is awaited in line, so nothing else in the run proceeds
    /// while waiting. No delay follows the final attempt.
    pub async fn fetch_with_retry(
        &self,
        feed_url: &str,
        on_event: &dyn Fn(PipelineEvent),
    ) -> Result<AtomFeed, FeedError> {
        let total = self.max_attempts();
        on_event(PipelineEvent::FetchStarted {
            url: feed_url.to_string(),
        });

        let mut attempt = 0;
        loop {
            let url = attempt_url(feed_url, attempt);
            debug!(url = %url, attempt = attempt + 1, total, "requesting feed");

            match self.fetch_feed(&url).await {
                Ok(feed) => {
                    debug!(entries = feed.len(), "feed decoded");
                    on_event(PipelineEvent::FeedDecoded {
                        entries: feed.len(),
                    });
                    return Ok(feed);
                }
                Err(e) => {
                    debug!(attempt = attempt + 1, total, error = %e, "feed attempt failed");
                    on_event(PipelineEvent::AttemptFailed {
                        attempt: attempt + 1,
                        total,
                        error: e.to_string(),
                    });

                    attempt += 1;
                    if attempt >= total {
                        return Err(FeedError::Exhausted {
                            attempts: total,
                            last: Box::new(e),
                        });
                    }
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }
}
