//! ct-harvest Library
//!
//! Searches a Certificate Transparency log search service for certificates
//! matching a term and summarizes who they belong to:
//! - Feed URL construction and retrieval with retries
//! - PEM extraction from Atom feed entries
//! - X.509 parsing into flat report records
//! - Aggregation of organizations, addresses, domains and alternative names
//! - Console and JSON reporting
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_harvest::config::Settings;
//! use ct_harvest::runner::{run_query, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> ct_harvest::Result<()> {
//!     let config = RunConfig {
//!         query: "Example Corp".to_string(),
//!         match_mode: "LIKE".to_string(),
//!         proxy: None,
//!         settings: Settings::default(),
//!     };
//!     let result = run_query(&config, &|_| {}).await?;
//!     println!("{:?}", result.report.domains);
//!     Ok(())
//! }
//! ```

pub mod certificate;
pub mod cli;
pub mod config;
pub mod ct;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{Certificate, QueryResult};
pub use report::AggregatedReport;
pub use runner::{PipelineEvent, RunConfig, RunResult};
pub use utils::{Result, ToolkitError};
