//! Fixed-width bordered table rendering.
//!
//! Geometry: a `+`-cornered rule above the centered header row and below the
//! last data row, a `|`-cornered rule before each data row. Algorithm names
//! and durations are centered, counts are right-aligned. A cell whose text
//! plus two padding characters exceeds its column width fails the whole
//! render; a partial table is never produced.

use crate::readable::{readable, readable_duration};
use sortbench_core::{Error, Result};
use sortbench_stats::AggregateResult;

const COLUMN_WIDTHS: [usize; 7] = [13, 16, 14, 21, 21, 25, 25];

const HEADERS: [&str; 7] = [
    "algorithm",
    "input size",
    "# of tests",
    "# of comparisons",
    "# of assignments",
    "median time(~)",
    "average time(~)",
];

enum Align {
    Center,
    Right,
}

/// Pad `text` into column `column`, or fail when it cannot fit.
///
/// Centering matches the reference layout: the text plus half the slack is
/// right-aligned within the column, leaving the larger half on the left.
fn cell(text: &str, column: usize, align: Align) -> Result<String> {
    let width = COLUMN_WIDTHS[column];
    if text.len() + 2 > width {
        return Err(Error::Format(
            "failed to create table, table size exceeded".to_string(),
        ));
    }
    Ok(match align {
        Align::Center => {
            let padded = format!("{text}{}", " ".repeat((width - text.len()) / 2));
            format!("{padded:>width$}")
        }
        Align::Right => format!("{:>width$}", format!("{text} ")),
    })
}

fn horizontal_rule(corner: char) -> String {
    let mut line = String::new();
    for width in COLUMN_WIDTHS {
        line.push(corner);
        line.push_str(&"-".repeat(width));
    }
    line.push(corner);
    line.push('\n');
    line
}

fn header_row() -> Result<String> {
    let mut row = String::new();
    for (column, header) in HEADERS.iter().enumerate() {
        row.push('|');
        row.push_str(&cell(header, column, Align::Center)?);
    }
    row.push_str("|\n");
    Ok(row)
}

fn data_row(result: &AggregateResult) -> Result<String> {
    let mut row = String::new();
    let cells = [
        cell(&result.algorithm, 0, Align::Center)?,
        cell(&readable(result.input_size), 1, Align::Right)?,
        cell(&readable(result.test_count), 2, Align::Right)?,
        cell(&readable(result.mean_comparisons), 3, Align::Right)?,
        cell(&readable(result.mean_assignments), 4, Align::Right)?,
        cell(&readable_duration(result.median_duration), 5, Align::Center)?,
        cell(&readable_duration(result.mean_duration), 6, Align::Center)?,
    ];
    for text in cells {
        row.push('|');
        row.push_str(&text);
    }
    row.push_str("|\n");
    Ok(row)
}

/// Render the full comparison table for an ordered sequence of results.
///
/// Either the complete table is returned or a `Format` error; no partial
/// output escapes.
pub fn render_table(results: &[AggregateResult]) -> Result<String> {
    let mut table = String::new();
    table.push_str(&horizontal_rule('+'));
    table.push_str(&header_row()?);
    for result in results {
        table.push_str(&horizontal_rule('|'));
        table.push_str(&data_row(result)?);
    }
    table.push_str(&horizontal_rule('+'));
    Ok(table)
}
