//! Dataset-level evaluation reports
//!
//! One [`TaskReport`] per task pair, aggregated into an [`EvaluationReport`]
//! by taking the mean of each metric across tasks.

use crate::dataset::{Dataset, TaskPair};
use crate::evaluator::TaskEvaluator;
use crate::Result;
use serde::{Deserialize, Serialize};

/// All agreement metrics for one task pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    /// Task identifier
    pub task_id: String,
    /// Page-number recall
    pub recall_by_page_number: f64,
    /// Page-number precision
    pub precision_by_page_number: f64,
    /// Character recall
    pub recall_by_char: f64,
    /// Character precision
    pub precision_by_char: f64,
}

impl TaskReport {
    /// Compute all metrics for one task pair
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyPageNumbers`] when a context carries a
    /// present-but-empty page-number list.
    pub fn evaluate(pair: &TaskPair) -> Result<Self> {
        let mut evaluator = TaskEvaluator::new(pair);
        Ok(Self {
            task_id: evaluator.task_id().to_string(),
            recall_by_page_number: evaluator.recall_by_page_number()?,
            precision_by_page_number: evaluator.precision_by_page_number()?,
            recall_by_char: evaluator.recall_by_char(),
            precision_by_char: evaluator.precision_by_char(),
        })
    }
}

/// Aggregated metrics across all tasks of a dataset comparison
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Name of the baseline dataset
    pub dataset: String,
    /// Number of evaluated tasks
    pub task_count: usize,
    /// Mean page-number recall
    pub mean_recall_by_page_number: f64,
    /// Mean page-number precision
    pub mean_precision_by_page_number: f64,
    /// Mean character recall
    pub mean_recall_by_char: f64,
    /// Mean character precision
    pub mean_precision_by_char: f64,
    /// Per-task reports
    pub tasks: Vec<TaskReport>,
}

impl EvaluationReport {
    /// Aggregate per-task reports into dataset-level means
    #[must_use]
    pub fn aggregate(dataset: impl Into<String>, tasks: Vec<TaskReport>) -> Self {
        let dataset = dataset.into();
        if tasks.is_empty() {
            return Self {
                dataset,
                ..Default::default()
            };
        }

        let n = tasks.len() as f64;
        Self {
            dataset,
            task_count: tasks.len(),
            mean_recall_by_page_number: tasks.iter().map(|t| t.recall_by_page_number).sum::<f64>()
                / n,
            mean_precision_by_page_number: tasks
                .iter()
                .map(|t| t.precision_by_page_number)
                .sum::<f64>()
                / n,
            mean_recall_by_char: tasks.iter().map(|t| t.recall_by_char).sum::<f64>() / n,
            mean_precision_by_char: tasks.iter().map(|t| t.precision_by_char).sum::<f64>() / n,
            tasks,
        }
    }

    /// Evaluate a sample dataset against its baseline
    ///
    /// Tasks are paired by id and every pair is evaluated.
    ///
    /// # Errors
    ///
    /// Returns pairing errors ([`crate::Error::MissingTask`],
    /// [`crate::Error::QuestionMismatch`]) and metric errors
    /// ([`crate::Error::EmptyPageNumbers`]).
    pub fn evaluate(baseline: &Dataset, sample: &Dataset) -> Result<Self> {
        let pairs = baseline.pair_with(sample)?;
        let tasks = pairs
            .iter()
            .map(TaskReport::evaluate)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::aggregate(baseline.name.clone(), tasks))
    }
}
