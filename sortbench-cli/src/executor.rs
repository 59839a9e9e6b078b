//! End-to-end comparison pipeline.
//!
//! Wires provider → trial runner → aggregator → renderer. Everything runs on
//! the calling thread; a failure at any stage surfaces before any output is
//! produced.

use sortbench_core::{AlgorithmSet, Dataset, Result, SortValue, TrialRunner};
use sortbench_report::render_table;
use sortbench_stats::{AggregateResult, aggregate};

/// Run the selected algorithms and aggregate their trials.
pub fn compare_results<T: SortValue>(
    dataset: &Dataset<T>,
    test_count: i64,
    selection: AlgorithmSet,
) -> Result<Vec<AggregateResult>> {
    let runner = TrialRunner::new(dataset, test_count)?;
    let runs = runner.run(selection)?;
    runs.iter()
        .map(|run| aggregate(run.algorithm, dataset.len() as u64, &run.trials))
        .collect()
}

/// Run the selected algorithms and render the full comparison table.
pub fn compare<T: SortValue>(
    dataset: &Dataset<T>,
    test_count: i64,
    selection: AlgorithmSet,
) -> Result<String> {
    let results = compare_results(dataset, test_count, selection)?;
    render_table(&results)
}
