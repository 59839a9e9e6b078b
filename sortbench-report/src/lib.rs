#![warn(missing_docs)]
//! SortBench Report - Comparison Table and JSON Output
//!
//! Renders per-algorithm aggregate results as:
//! - a bordered, fixed-width text table (the primary output)
//! - machine-readable JSON

mod json;
mod readable;
mod table;

pub use json::{Report, ReportMeta, build_report, generate_json_report};
pub use readable::{readable, readable_duration};
pub use table::render_table;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable fixed-width table
    Human,
    /// JSON with run metadata
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "table" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
