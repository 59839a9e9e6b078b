#![warn(missing_docs)]
//! SortBench Statistical Aggregation
//!
//! Reduces one algorithm's trial sequence to a single [`AggregateResult`]:
//! - median duration: the element at index ⌊n/2⌋ of the ascending-sorted
//!   durations, a deterministic middle-index pick with no interpolation;
//! - mean duration: integer-truncated average in nanoseconds;
//! - mean comparison/assignment counts: integer-truncated averages.
//!
//! The source trials are never mutated.

use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, Error, Result, TrialResult};
use std::time::Duration;

/// Median/mean summary of all trials for one algorithm on one dataset.
///
/// Immutable once produced; consumed by the table renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Display name of the algorithm.
    pub algorithm: String,
    /// Number of elements in the dataset every trial sorted.
    pub input_size: u64,
    /// Number of trials aggregated.
    pub test_count: u64,
    /// Duration at index ⌊n/2⌋ of the sorted trial durations.
    pub median_duration: Duration,
    /// Integer-truncated mean of the trial durations.
    pub mean_duration: Duration,
    /// Integer-truncated mean comparison count.
    pub mean_comparisons: u64,
    /// Integer-truncated mean assignment count.
    pub mean_assignments: u64,
}

/// Aggregate one algorithm's trial sequence.
///
/// Fails with `InvalidArgument` on an empty sequence; the trial count
/// invariant is enforced upstream by the runner, so this only guards against
/// misuse of the library surface.
pub fn aggregate(
    algorithm: Algorithm,
    input_size: u64,
    trials: &[TrialResult],
) -> Result<AggregateResult> {
    if trials.is_empty() {
        return Err(Error::InvalidArgument(
            "cannot aggregate an empty trial sequence".to_string(),
        ));
    }
    let n = trials.len();

    let mut durations: Vec<Duration> = trials.iter().map(|t| t.duration).collect();
    durations.sort_unstable();
    let median_duration = durations[n / 2];

    let total_nanos: u128 = durations.iter().map(Duration::as_nanos).sum();
    let mean_duration = Duration::from_nanos((total_nanos / n as u128) as u64);

    let total_comparisons: u128 = trials.iter().map(|t| u128::from(t.comparisons)).sum();
    let total_assignments: u128 = trials.iter().map(|t| u128::from(t.assignments)).sum();

    Ok(AggregateResult {
        algorithm: algorithm.name().to_string(),
        input_size,
        test_count: n as u64,
        median_duration,
        mean_duration,
        mean_comparisons: (total_comparisons / n as u128) as u64,
        mean_assignments: (total_assignments / n as u128) as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(micros: u64, comparisons: u64, assignments: u64) -> TrialResult {
        TrialResult {
            duration: Duration::from_micros(micros),
            comparisons,
            assignments,
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result = aggregate(Algorithm::Bubble, 10, &[]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn median_is_the_middle_index_pick_for_odd_n() {
        let trials = [trial(5, 0, 0), trial(1, 0, 0), trial(4, 0, 0), trial(2, 0, 0), trial(3, 0, 0)];
        let agg = aggregate(Algorithm::Quick, 10, &trials).unwrap();
        assert_eq!(agg.median_duration, Duration::from_micros(3));
        assert_eq!(agg.mean_duration, Duration::from_micros(3));
    }

    #[test]
    fn median_is_the_upper_middle_for_even_n() {
        // No interpolation: sorted [1,2,3,4] picks index 4/2 = 2, i.e. 3.
        let trials = [trial(4, 0, 0), trial(1, 0, 0), trial(3, 0, 0), trial(2, 0, 0)];
        let agg = aggregate(Algorithm::Quick, 10, &trials).unwrap();
        assert_eq!(agg.median_duration, Duration::from_micros(3));
    }

    #[test]
    fn single_trial_reports_its_duration_exactly() {
        let exact = TrialResult {
            duration: Duration::from_nanos(1_234_567),
            comparisons: 99,
            assignments: 77,
        };
        let agg = aggregate(Algorithm::Merge, 5, &[exact]).unwrap();
        assert_eq!(agg.median_duration, exact.duration);
        assert_eq!(agg.mean_duration, exact.duration);
        assert_eq!(agg.mean_comparisons, 99);
        assert_eq!(agg.mean_assignments, 77);
        assert_eq!(agg.test_count, 1);
    }

    #[test]
    fn mean_duration_truncates() {
        let trials = [
            TrialResult {
                duration: Duration::from_nanos(1),
                comparisons: 0,
                assignments: 0,
            },
            TrialResult {
                duration: Duration::from_nanos(2),
                comparisons: 0,
                assignments: 0,
            },
        ];
        let agg = aggregate(Algorithm::Heap, 1, &trials).unwrap();
        assert_eq!(agg.mean_duration, Duration::from_nanos(1));
    }

    #[test]
    fn mean_counts_truncate() {
        let trials = [trial(1, 3, 10), trial(1, 4, 11)];
        let agg = aggregate(Algorithm::Selection, 2, &trials).unwrap();
        assert_eq!(agg.mean_comparisons, 3);
        assert_eq!(agg.mean_assignments, 10);
    }

    #[test]
    fn source_trials_are_untouched() {
        let trials = vec![trial(9, 1, 2), trial(1, 3, 4)];
        let before = trials.clone();
        aggregate(Algorithm::Insertion, 2, &trials).unwrap();
        assert_eq!(trials, before);
    }
}
