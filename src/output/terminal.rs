//! Console report and progress rendering

use crate::report::AggregatedReport;
use crate::runner::{PipelineEvent, RunResult};
use crate::utils::progress::{print_fail, print_info, print_warning};
use console::style;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Render the aggregated findings as console text.
///
/// An empty run renders as a single `No certificates found.` line.
pub fn render_report(report: &AggregatedReport) -> String {
    if report.is_empty() {
        return "No certificates found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Found:").bold());
    write_section(&mut out, "Organizations", &report.organizations);
    write_section(&mut out, "Addresses", &report.addresses);
    write_section(&mut out, "Domains", &report.domains);
    write_section(
        &mut out,
        "Subject Alternative Names (SANs not in Domains)",
        &report.alternative_names,
    );
    out
}

fn write_section(out: &mut String, title: &str, values: &BTreeSet<String>) {
    let _ = writeln!(out, "- {}:", style(title).cyan().bold());
    if values.is_empty() {
        let _ = writeln!(out, "  - {}", style("None").dim());
        return;
    }
    for value in values {
        let _ = writeln!(out, "  - {}", value);
    }
}

/// Print the run header followed by the findings
pub fn print_report(result: &RunResult) {
    println!("{} {}", style("Query:").bold(), result.query);
    println!(
        "{} {} of {} feed entries",
        style("Certificates parsed:").bold(),
        result.report.certificates.len(),
        result.entries
    );
    println!();
    print!("{}", render_report(&result.report));
}

/// One-line description of a pipeline event.
///
/// Per-certificate successes are only described when `verbose` is set.
pub fn describe_event(event: &PipelineEvent, verbose: bool) -> Option<String> {
    match event {
        PipelineEvent::ProxyEnabled { proxy } => {
            Some(format!("Using proxy for this request! ({})", proxy))
        }
        PipelineEvent::FetchStarted { url } => Some(format!("Fetching feed: {}", url)),
        PipelineEvent::AttemptFailed {
            attempt,
            total,
            error,
        } => Some(format!(
            "Error fetching feed (attempt {}/{}): {}",
            attempt, total, error
        )),
        PipelineEvent::FeedDecoded { entries } => {
            Some(format!("Feed decoded with {} entries", entries))
        }
        PipelineEvent::CertificateParsed { url } if verbose => {
            Some(format!("Parsed certificate: {}", url))
        }
        PipelineEvent::CertificateParsed { .. } => None,
        PipelineEvent::EntrySkipped { url, reason } => Some(format!(
            "Error extracting certificate from {}: {}",
            url, reason
        )),
    }
}

/// Print a pipeline event with the matching status prefix
pub fn print_event(event: &PipelineEvent, verbose: bool) {
    let Some(line) = describe_event(event, verbose) else {
        return;
    };
    match event {
        PipelineEvent::AttemptFailed { attempt, total, .. } if attempt == total => {
            print_fail(&line)
        }
        PipelineEvent::AttemptFailed { .. } | PipelineEvent::EntrySkipped { .. } => {
            print_warning(&line)
        }
        _ => print_info(&line),
    }
}
