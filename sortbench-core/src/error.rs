//! Error types shared across the harness.
//!
//! Every component surfaces errors upward without local recovery; the CLI
//! catches them, prints one diagnostic line, and exits non-zero. A failed run
//! never emits a partial table.

use std::collections::TryReserveError;

/// Errors produced by dataset provisioning, trial execution, and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-positive or otherwise malformed size, count, or algorithm name.
    #[error("{0}")]
    InvalidArgument(String),

    /// Requested size or count beyond the maximum addressable element count.
    #[error("{0}")]
    CapacityExceeded(String),

    /// File open, create, read, or write failure.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A formatted value cannot fit its fixed column width, or an input file
    /// yielded no parseable numeric tokens.
    #[error("{0}")]
    Format(String),

    /// Buffer or per-trial clone allocation failure. Fatal to the run.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
