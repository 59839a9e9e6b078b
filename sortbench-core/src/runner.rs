//! Repeated-trial execution.
//!
//! A trial is one timed execution of one algorithm against one freshly cloned
//! dataset. Trials run strictly sequentially so wall-clock measurements stay
//! uncontended; every trial sorts a fresh clone so a later trial never sees a
//! buffer pre-ordered by an earlier one.

use crate::algorithms::{Algorithm, AlgorithmSet, OpCounts};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::value::SortValue;
use std::time::{Duration, Instant};

/// Elapsed duration and final counter values for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Wall-clock duration of the sort call, monotonic clock.
    pub duration: Duration,
    /// Comparison count for this single invocation.
    pub comparisons: u64,
    /// Assignment count for this single invocation.
    pub assignments: u64,
}

/// The ordered trial sequence recorded for one algorithm.
#[derive(Debug, Clone)]
pub struct AlgorithmTrials {
    /// The algorithm that produced these trials.
    pub algorithm: Algorithm,
    /// One entry per trial, in execution order.
    pub trials: Vec<TrialResult>,
}

fn validate_test_count(test_count: i64) -> Result<usize> {
    if test_count <= 0 {
        return Err(Error::InvalidArgument(
            "test count cannot be zero or negative".to_string(),
        ));
    }
    let max = isize::MAX as i64 / std::mem::size_of::<TrialResult>() as i64;
    if test_count > max {
        return Err(Error::CapacityExceeded(format!(
            "test count {test_count} exceeds the maximum of {max} trials"
        )));
    }
    Ok(test_count as usize)
}

/// Executes a chosen selection of algorithms `test_count` times each against
/// fresh clones of a borrowed [`Dataset`].
#[derive(Debug)]
pub struct TrialRunner<'a, T: SortValue> {
    dataset: &'a Dataset<T>,
    test_count: usize,
}

impl<'a, T: SortValue> TrialRunner<'a, T> {
    /// Create a runner for `test_count` trials per algorithm.
    ///
    /// Fails with `InvalidArgument` for a non-positive count and with
    /// `CapacityExceeded` beyond the addressable maximum.
    pub fn new(dataset: &'a Dataset<T>, test_count: i64) -> Result<Self> {
        let test_count = validate_test_count(test_count)?;
        Ok(Self {
            dataset,
            test_count,
        })
    }

    /// Number of trials this runner performs per algorithm.
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Run every selected algorithm, in the fixed display order.
    pub fn run(&self, selection: AlgorithmSet) -> Result<Vec<AlgorithmTrials>> {
        let mut runs = Vec::with_capacity(selection.len());
        for algorithm in selection.iter() {
            runs.push(AlgorithmTrials {
                algorithm,
                trials: self.run_one(algorithm)?,
            });
        }
        Ok(runs)
    }

    /// Run the trial sequence for a single algorithm.
    pub fn run_one(&self, algorithm: Algorithm) -> Result<Vec<TrialResult>> {
        tracing::debug!(
            algorithm = algorithm.name(),
            trials = self.test_count,
            input_size = self.dataset.len(),
            "running trials"
        );
        // Fresh result buffer per invocation; nothing carries over between runs.
        let mut trials = Vec::new();
        trials.try_reserve_exact(self.test_count)?;
        for _ in 0..self.test_count {
            let mut buffer = self.dataset.clone_values()?;
            let mut counts = OpCounts::default();
            let start = Instant::now();
            algorithm.sort(std::hint::black_box(&mut buffer), &mut counts);
            let duration = start.elapsed();
            std::hint::black_box(&buffer);
            trials.push(TrialResult {
                duration,
                comparisons: counts.comparisons,
                assignments: counts.assignments,
            });
        }
        Ok(trials)
    }
}
