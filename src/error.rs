//! Error types for ragbench

use thiserror::Error;

/// Result type for ragbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for evaluation operations
#[derive(Error, Debug)]
pub enum Error {
    /// A page-number list was present but empty where a non-empty list is required
    #[error("empty page number list in {side} contexts")]
    EmptyPageNumbers {
        /// Which side of the comparison supplied the empty list
        side: &'static str,
    },

    /// Baseline and sample questions do not belong to the same task
    #[error("baseline and sample questions do not match for task {0}")]
    QuestionMismatch(String),

    /// A baseline task has no counterpart in the sample dataset
    #[error("task {0} missing from sample dataset")]
    MissingTask(String),

    /// Serialization error (serde_json)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
