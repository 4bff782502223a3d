//! ct-harvest - Certificate Transparency search and summary tool
//!
//! Queries a CT log search feed for a term, parses every certificate it
//! returns and reports the organizations, addresses and domains found.

use anyhow::{bail, Context};
use clap::Parser;
use console::style;
use ct_harvest::config::Settings;
use ct_harvest::output;
use ct_harvest::runner::{self, RunConfig};
use ct_harvest::utils::progress::{create_spinner, print_info};
use ct_harvest::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let Some(query) = cli.search_term() else {
        bail!("a search term is required (-q/--query)");
    };

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    cli.apply_to(&mut settings);

    let config = RunConfig {
        query: query.to_string(),
        match_mode: cli.effective_match(&settings).to_string(),
        proxy: cli.proxy.clone(),
        settings,
    };

    let spinner = create_spinner(&format!("Searching CT logs for {}...", query));
    let result = runner::run_query(&config, &|event| {
        if !cli.json {
            spinner.suspend(|| output::print_event(&event, cli.verbose));
        }
    })
    .await;
    spinner.finish_and_clear();
    let result = result.context("Error fetching feed")?;

    if cli.json {
        output::print_json(&result.query_result())?;
    } else {
        output::print_report(&result);
    }

    if let Some(base) = &cli.output {
        let path = output::write_json_file(base, &result.query_result())
            .context("Error creating JSON file")?;
        if cli.json {
            eprintln!("Results saved to {}", path.display());
        } else {
            print_info(&format!("Results saved to {}", path.display()));
        }
    }

    Ok(())
}
