//! Progress indicators for CLI mode
//!
//! This module provides progress display using indicatif and console.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print an info line
pub fn print_info(message: &str) {
    println!("{} {}", style("[i]").cyan(), message);
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("{} {}", style("[!]").yellow(), style(message).yellow());
}

/// Print a failure line
pub fn print_fail(message: &str) {
    println!("{} {}", style("[x]").red(), style(message).red());
}
