#![warn(missing_docs)]
//! SortBench Core - Measurement Harness
//!
//! This crate provides the measurement side of the comparison harness:
//! - `Dataset` provisioning (random generation and file loading)
//! - The six instrumented in-place sorting routines with their counting policy
//! - `TrialRunner` for repeated, isolated, sequentially timed trials
//!
//! Everything here is deliberately single-threaded: trials are timed with a
//! monotonic clock and contended scheduling would bias the wall-clock numbers.

mod algorithms;
mod dataset;
mod error;
mod runner;
mod value;

pub use algorithms::{Algorithm, AlgorithmSet, OpCounts};
pub use dataset::{Dataset, generate_files};
pub use error::{Error, Result};
pub use runner::{AlgorithmTrials, TrialResult, TrialRunner};
pub use value::SortValue;

/// Default number of elements in a generated dataset.
pub const DEFAULT_INPUT_SIZE: i64 = 5_000;

/// Default number of timed trials per algorithm.
pub const DEFAULT_TEST_COUNT: i64 = 21;

/// Default number of files written by [`generate_files`].
pub const DEFAULT_FILE_COUNT: i64 = 5;
