//! Output formatting module
//!
//! Provides the console report and the JSON export.

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json, write_json_file};
pub use terminal::{describe_event, print_event, print_report, render_report};
