//! Report generation module
//!
//! Aggregates parsed certificates into deduplicated findings.

pub mod aggregate;

pub use aggregate::AggregatedReport;
