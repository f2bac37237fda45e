//! Task-level evaluation with lazily computed, cached metrics
//!
//! A [`TaskEvaluator`] runs in two phases. Extraction happens once at
//! construction: page-number lists and character counts are pulled out of the
//! task pair. Metrics are then computed on first access and cached per
//! [`MetricKind`], so repeated calls return the identical value without
//! recomputation. Failed computations cache nothing.

use crate::chars::{precision_by_char, recall_by_char, CharCounts};
use crate::chat::ChatModel;
use crate::dataset::{Context, TaskPair};
use crate::pages;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// The agreement metrics an evaluator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Page-number recall (baseline pages recovered by the sample)
    RecallByPageNumber,
    /// Page-number precision (sample pages matching the baseline)
    PrecisionByPageNumber,
    /// Character recall, averaged over the context cross product
    RecallByChar,
    /// Character precision, averaged over the context cross product
    PrecisionByChar,
}

/// Page-number lists extracted from both sides of a comparison
#[derive(Debug, Clone)]
struct PageNumberPair {
    baseline: Vec<Vec<u32>>,
    sample: Vec<Vec<u32>>,
}

/// Evaluates one baseline/sample task pair
pub struct TaskEvaluator {
    task_id: String,
    /// None when either side carries no page-number data at all
    page_numbers: Option<PageNumberPair>,
    baseline_counts: Vec<CharCounts>,
    sample_counts: Vec<CharCounts>,
    chat_model: Option<Arc<dyn ChatModel>>,
    cache: HashMap<MetricKind, f64>,
}

impl TaskEvaluator {
    /// Create an evaluator for a task pair, running extraction immediately
    #[must_use]
    pub fn new(pair: &TaskPair) -> Self {
        let baseline_pages = extract_page_lists(pair.baseline_contexts());
        let sample_pages = extract_page_lists(pair.sample_contexts());

        // Either side empty means the metric is undefined, not zero-length
        // input; keep that distinction with a sentinel.
        let page_numbers = if baseline_pages.is_empty() || sample_pages.is_empty() {
            None
        } else {
            Some(PageNumberPair {
                baseline: baseline_pages,
                sample: sample_pages,
            })
        };

        Self {
            task_id: pair.id().to_string(),
            page_numbers,
            baseline_counts: extract_char_counts(pair.baseline_contexts()),
            sample_counts: extract_char_counts(pair.sample_contexts()),
            chat_model: None,
            cache: HashMap::new(),
        }
    }

    /// Attach a chat-model collaborator
    ///
    /// The agreement metrics never call it; it is held for LLM-judged
    /// metrics computed by surrounding code.
    #[must_use]
    pub fn with_chat_model(mut self, chat_model: Arc<dyn ChatModel>) -> Self {
        self.chat_model = Some(chat_model);
        self
    }

    /// Task identifier this evaluator reports on
    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// The attached chat model, if any
    #[must_use]
    pub fn chat_model(&self) -> Option<&Arc<dyn ChatModel>> {
        self.chat_model.as_ref()
    }

    /// Page-number recall, computed on first call and cached
    ///
    /// When either side supplied no page-number data, a warning is emitted
    /// and the metric degrades to 0.0 instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyPageNumbers`] when a baseline context
    /// carries a present-but-empty page-number list.
    pub fn recall_by_page_number(&mut self) -> Result<f64> {
        if let Some(&value) = self.cache.get(&MetricKind::RecallByPageNumber) {
            return Ok(value);
        }

        let value = match &self.page_numbers {
            Some(pair) => pages::recall_by_page_number(&pair.baseline, &pair.sample)?,
            None => self.degrade_missing_pages("recall_by_page_number"),
        };

        self.cache.insert(MetricKind::RecallByPageNumber, value);
        Ok(value)
    }

    /// Page-number precision, computed on first call and cached
    ///
    /// Missing page-number data degrades to 0.0 with a warning, the same
    /// lossy convention as recall.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyPageNumbers`] when a sample context
    /// carries a present-but-empty page-number list.
    pub fn precision_by_page_number(&mut self) -> Result<f64> {
        if let Some(&value) = self.cache.get(&MetricKind::PrecisionByPageNumber) {
            return Ok(value);
        }

        let value = match &self.page_numbers {
            Some(pair) => pages::precision_by_page_number(&pair.baseline, &pair.sample)?,
            None => self.degrade_missing_pages("precision_by_page_number"),
        };

        self.cache.insert(MetricKind::PrecisionByPageNumber, value);
        Ok(value)
    }

    /// Character recall averaged over every baseline × sample context pair
    ///
    /// The full cross product, not best-match: deliberately different from
    /// the page-number metrics. Returns 0.0 when either side has no contexts.
    pub fn recall_by_char(&mut self) -> f64 {
        if let Some(&value) = self.cache.get(&MetricKind::RecallByChar) {
            return value;
        }

        let value = self.mean_over_cross_product(recall_by_char);
        self.cache.insert(MetricKind::RecallByChar, value);
        value
    }

    /// Character precision averaged over every baseline × sample context pair
    pub fn precision_by_char(&mut self) -> f64 {
        if let Some(&value) = self.cache.get(&MetricKind::PrecisionByChar) {
            return value;
        }

        let value = self.mean_over_cross_product(precision_by_char);
        self.cache.insert(MetricKind::PrecisionByChar, value);
        value
    }

    fn mean_over_cross_product(&self, metric: fn(&CharCounts, &CharCounts) -> f64) -> f64 {
        let pair_count = self.baseline_counts.len() * self.sample_counts.len();
        if pair_count == 0 {
            return 0.0;
        }

        let sum: f64 = self
            .baseline_counts
            .iter()
            .flat_map(|baseline| {
                self.sample_counts
                    .iter()
                    .map(move |sample| metric(baseline, sample))
            })
            .sum();

        sum / pair_count as f64
    }

    fn degrade_missing_pages(&self, metric: &str) -> f64 {
        warn!(
            task_id = %self.task_id,
            metric,
            "no page number data on one side of the comparison; reporting 0.0"
        );
        0.0
    }
}

/// Collect the page-number lists of contexts that carry page data
fn extract_page_lists(contexts: &[Context]) -> Vec<Vec<u32>> {
    contexts
        .iter()
        .filter_map(|context| context.page_numbers.clone())
        .collect()
}

fn extract_char_counts(contexts: &[Context]) -> Vec<CharCounts> {
    contexts
        .iter()
        .map(|context| CharCounts::from_text(&context.text))
        .collect()
}
