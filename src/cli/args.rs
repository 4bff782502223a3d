//! CLI argument definitions using clap

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ct-harvest")]
#[command(version)]
#[command(
    about = "Search Certificate Transparency logs and summarize who the certificates belong to",
    long_about = None
)]
pub struct Cli {
    /// Search term, e.g. an organization or domain name
    #[arg(short, long, value_name = "TERM")]
    pub query: String,

    /// Match mode passed to the search service (=, ILIKE, LIKE, single, any, FTS)
    #[arg(short = 'm', long = "match", value_name = "MODE")]
    pub match_mode: Option<String>,

    /// Proxy URL for all feed requests
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Export results to <PATH>.json
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the results as JSON instead of the console report
    #[arg(long)]
    pub json: bool,

    /// Retries after the first failed fetch
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Configuration file (defaults to config/default.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The search term, or `None` when it is blank
    pub fn search_term(&self) -> Option<&str> {
        (!self.query.trim().is_empty()).then_some(self.query.as_str())
    }

    /// The effective match mode
    pub fn effective_match<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.match_mode
            .as_deref()
            .unwrap_or(settings.default_match.as_str())
    }

    /// Apply command-line overrides to loaded settings
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(retries) = self.retries {
            settings.feed.retries = retries;
        }
        if let Some(mode) = &self.match_mode {
            settings.default_match = mode.clone();
        }
    }
}
