#![warn(missing_docs)]
//! # SortBench
//!
//! Empirical comparison of six classic in-place/divide-and-conquer sorting
//! algorithms over numeric datasets, reporting per-algorithm operation counts
//! and timing statistics in a fixed-width table.
//!
//! - **Instrumented routines**: selection, bubble, quick, merge, insertion,
//!   and heap sort, counting comparisons and assignments under one fixed
//!   policy so the numbers are comparable across algorithms
//! - **Isolated trials**: every trial sorts a fresh clone of the dataset,
//!   timed sequentially with a monotonic clock
//! - **Deterministic aggregation**: middle-index median and integer-truncated
//!   means
//!
//! ## Quick Start
//!
//! ```no_run
//! use sortbench::{AlgorithmSet, Dataset, compare};
//!
//! let dataset: Dataset<i64> = Dataset::generate(1_000)?;
//! let table = compare(&dataset, 21, AlgorithmSet::ALL)?;
//! print!("{table}");
//! # Ok::<(), sortbench::Error>(())
//! ```

// Re-export the harness surface
pub use sortbench_core::{
    Algorithm, AlgorithmSet, AlgorithmTrials, DEFAULT_FILE_COUNT, DEFAULT_INPUT_SIZE,
    DEFAULT_TEST_COUNT, Dataset, Error, OpCounts, Result, SortValue, TrialResult, TrialRunner,
    generate_files,
};

// Re-export aggregation
pub use sortbench_stats::{AggregateResult, aggregate};

// Re-export rendering
pub use sortbench_report::{
    OutputFormat, Report, ReportMeta, build_report, generate_json_report, readable,
    readable_duration, render_table,
};

// Re-export the pipeline and CLI entry point
pub use sortbench_cli::{compare, compare_results, run};
