//! Query orchestration engine
//!
//! Runs one search end to end: build the feed URL, fetch it with retries,
//! extract and parse every entry's certificate, and aggregate the results.
//! Progress is reported through an event callback so any frontend can
//! render it.

use crate::certificate::{extract_certificate, parse_certificate};
use crate::config::Settings;
use crate::ct::{build_feed_url, FeedClient, FeedSource};
use crate::models::{AtomFeed, Certificate, QueryResult};
use crate::report::AggregatedReport;
use crate::utils::Result;
use tracing::debug;

/// Configuration for a query run
pub struct RunConfig {
    pub query: String,
    pub match_mode: String,
    pub proxy: Option<String>,
    pub settings: Settings,
}

impl RunConfig {
    /// The feed URL this run will request
    pub fn feed_url(&self) -> String {
        build_feed_url(&self.settings.feed.base_url, &self.query, &self.match_mode)
    }
}

/// Events emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    ProxyEnabled {
        proxy: String,
    },
    FetchStarted {
        url: String,
    },
    AttemptFailed {
        attempt: u32,
        total: u32,
        error: String,
    },
    FeedDecoded {
        entries: usize,
    },
    CertificateParsed {
        url: String,
    },
    EntrySkipped {
        url: String,
        reason: String,
    },
}

/// Complete results from a query run
#[derive(Debug, Clone)]
pub struct RunResult {
    pub query: String,
    pub feed_url: String,
    /// Entries in the decoded feed
    pub entries: usize,
    pub skipped: usize,
    pub report: AggregatedReport,
}

impl RunResult {
    /// The export envelope for this run
    pub fn query_result(&self) -> QueryResult {
        QueryResult {
            query: self.query.clone(),
            url: self.feed_url.clone(),
            certificates: self.report.certificates.clone(),
        }
    }
}

/// Extract and parse the certificate in every entry, in feed order.
///
/// Entries without a usable certificate are reported and skipped.
pub fn process_feed(feed: &AtomFeed, on_event: &dyn Fn(PipelineEvent)) -> Vec<Certificate> {
    let mut certificates = Vec::with_capacity(feed.len());

    for entry in &feed.entries {
        let parsed = extract_certificate(&entry.summary)
            .and_then(|pem| parse_certificate(&pem, &entry.id));

        match parsed {
            Ok(cert) => {
                on_event(PipelineEvent::CertificateParsed {
                    url: entry.id.clone(),
                });
                certificates.push(cert);
            }
            Err(e) => {
                debug!(url = %entry.id, error = %e, "skipping feed entry");
                on_event(PipelineEvent::EntrySkipped {
                    url: entry.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    certificates
}

/// Run a query against the configured CT search service
pub async fn run_query(config: &RunConfig, on_event: &dyn Fn(PipelineEvent)) -> Result<RunResult> {
    let client = FeedClient::from_settings(&config.settings.feed, config.proxy.as_deref())?;
    if let Some(proxy) = &config.proxy {
        on_event(PipelineEvent::ProxyEnabled {
            proxy: proxy.clone(),
        });
    }
    run_query_with(&client, config, on_event).await
}

/// Run a query through an existing feed client
pub async fn run_query_with<S: FeedSource>(
    client: &FeedClient<S>,
    config: &RunConfig,
    on_event: &dyn Fn(PipelineEvent),
) -> Result<RunResult> {
    let feed_url = config.feed_url();
    let feed = client.fetch_with_retry(&feed_url, on_event).await?;

    let certificates = process_feed(&feed, on_event);
    let skipped = feed.len() - certificates.len();

    Ok(RunResult {
        query: config.query.clone(),
        feed_url,
        entries: feed.len(),
        skipped,
        report: AggregatedReport::from_certificates(certificates),
    })
}
