//! ragbench: agreement metrics for RAG retrieval runs
//!
//! This crate compares the contexts retrieved by a RAG system (the *sample*)
//! against a reference run (the *baseline*) and computes recall/precision
//! over page numbers and over character multisets.
//!
//! # Quick Start
//!
//! ```rust
//! use ragbench::{Context, Task, TaskEvaluator, TaskPair};
//!
//! let baseline = Task::new(
//!     "1",
//!     "What does positional encoding provide?",
//!     "Information about word positions.",
//!     vec![Context::new("Positional encoding provides position information.", "data/attention.pdf")
//!         .with_page_numbers(vec![5])],
//! );
//! let sample = Task::new(
//!     "1",
//!     "What does positional encoding provide?",
//!     "The position of words in a sentence.",
//!     vec![Context::new("Positional encoding provides position information.", "data/attention.pdf")
//!         .with_page_numbers(vec![5])
//!         .with_relevance_score(0.91)],
//! );
//!
//! let pair = TaskPair::new(baseline, sample).unwrap();
//! let mut evaluator = TaskEvaluator::new(&pair);
//!
//! assert_eq!(evaluator.recall_by_page_number().unwrap(), 1.0);
//! assert_eq!(evaluator.precision_by_page_number().unwrap(), 1.0);
//! assert_eq!(evaluator.recall_by_char(), 1.0);
//! ```
//!
//! # Metric Policies
//!
//! The two metric families deliberately aggregate differently:
//!
//! - Page-number metrics score each context list against its *best-matching*
//!   counterpart, so context order does not have to line up.
//! - Character metrics average over the *full cross product* of baseline and
//!   sample contexts.
//!
//! A present-but-empty page-number list is rejected as invalid input, while
//! a side with no page-number data at all degrades the metric to `0.0` with
//! a logged warning.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod chars;
pub mod chat;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod pages;
pub mod report;

pub use chars::{precision_by_char, recall_by_char, CharCounts};
pub use chat::{ChatModel, MockChatModel};
pub use dataset::{Context, ContextRecord, Dataset, DatasetRecord, Task, TaskPair, TaskRecord};
pub use error::{Error, Result};
pub use evaluator::{MetricKind, TaskEvaluator};
pub use pages::{precision_by_page_number, recall_by_page_number};
pub use report::{EvaluationReport, TaskReport};
