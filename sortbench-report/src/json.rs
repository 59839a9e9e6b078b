//! JSON Output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_stats::AggregateResult;

/// Run metadata attached to a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Workspace version that produced the report.
    pub version: String,
    /// Wall-clock time the report was produced.
    pub timestamp: DateTime<Utc>,
}

/// Machine-readable run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One aggregate per selected algorithm, in display order.
    pub results: Vec<AggregateResult>,
}

/// Assemble a report from per-algorithm aggregates.
pub fn build_report(results: Vec<AggregateResult>) -> Report {
    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        },
        results,
    }
}

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
