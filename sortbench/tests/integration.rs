//! Integration tests for SortBench
//!
//! These tests verify the end-to-end behavior of the comparison harness:
//! provider → trial runner → aggregator → renderer.

use sortbench::{
    Algorithm, AlgorithmSet, Dataset, Error, TrialRunner, aggregate, compare, compare_results,
    readable, render_table,
};

/// Full pipeline over all six algorithms renders a complete bordered table.
#[test]
fn full_comparison_renders_a_complete_table() {
    let dataset: Dataset<i64> = Dataset::generate_in_range(50, -100, 100).unwrap();
    let table = compare(&dataset, 3, AlgorithmSet::ALL).unwrap();

    let lines: Vec<&str> = table.lines().collect();
    // outer rule, header, then (rule + row) per algorithm, closing rule
    assert_eq!(lines.len(), 3 + 2 * Algorithm::COUNT);
    assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
    assert!(lines[lines.len() - 1].starts_with('+'));
    for algorithm in Algorithm::ALL {
        assert!(table.contains(algorithm.name()), "missing {}", algorithm.name());
    }
    // every line is the same width
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}

/// The spec fixture: bubble sort over [5,3,4,1,2], one trial.
#[test]
fn bubble_fixture_counts_survive_the_pipeline() {
    let dataset = Dataset::from_values(vec![5i64, 3, 4, 1, 2]).unwrap();
    let results = compare_results(&dataset, 1, AlgorithmSet::single(Algorithm::Bubble)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].algorithm, "bubble");
    assert_eq!(results[0].input_size, 5);
    assert_eq!(results[0].test_count, 1);
    assert_eq!(results[0].mean_comparisons, 10);
    assert_eq!(results[0].mean_assignments, 16);
}

/// A single trial's median equals its measured duration exactly.
#[test]
fn single_trial_median_is_exact() {
    let dataset = Dataset::from_values(vec![3i64, 1, 2]).unwrap();
    let runner = TrialRunner::new(&dataset, 1).unwrap();
    let trials = runner.run_one(Algorithm::Heap).unwrap();
    let agg = aggregate(Algorithm::Heap, dataset.len() as u64, &trials).unwrap();
    assert_eq!(agg.median_duration, trials[0].duration);
    assert_eq!(agg.mean_duration, trials[0].duration);
}

/// Loading a file written by the generator round-trips through a comparison.
#[test]
fn generated_files_feed_back_into_the_harness() {
    let dir = tempfile::tempdir().unwrap();
    sortbench::generate_files::<i64>(dir.path(), 2, 25, 0, 1_000).unwrap();

    let dataset: Dataset<i64> = Dataset::load(dir.path().join("input2.txt")).unwrap();
    assert_eq!(dataset.len(), 25);

    let results = compare_results(&dataset, 2, AlgorithmSet::single(Algorithm::Quick)).unwrap();
    assert_eq!(results[0].input_size, 25);
}

/// Errors surface without partial output.
#[test]
fn failed_runs_produce_no_table() {
    let dataset = Dataset::from_values(vec![2i64, 1]).unwrap();
    assert!(matches!(
        compare(&dataset, 0, AlgorithmSet::ALL),
        Err(Error::InvalidArgument(_))
    ));

    // A renderer failure also yields nothing but the error.
    let results = vec![sortbench::AggregateResult {
        algorithm: "much-too-long-a-name".to_string(),
        input_size: 1,
        test_count: 1,
        median_duration: std::time::Duration::ZERO,
        mean_duration: std::time::Duration::ZERO,
        mean_comparisons: 0,
        mean_assignments: 0,
    }];
    assert!(matches!(render_table(&results), Err(Error::Format(_))));
}

/// Readable grouping as specified.
#[test]
fn readable_grouping_examples() {
    assert_eq!(readable(1_234_567), "1'234'567");
    assert_eq!(readable(999), "999");
}
