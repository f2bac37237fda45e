//! Character-multiset agreement metrics
//!
//! A text is reduced to a character-frequency multiset and two texts are
//! compared by multiset intersection. No normalization is applied: counting
//! is case- and whitespace-sensitive by design, so callers that want
//! case-insensitive comparison must pre-normalize their texts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Character-frequency multiset derived from a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCounts {
    counts: HashMap<char, usize>,
}

impl CharCounts {
    /// Count the occurrences of each character in the given text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Get the count for a single character (0 when absent)
    #[must_use]
    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no characters were counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (character, count) entries
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl FromIterator<(char, usize)> for CharCounts {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Size of the multiset intersection of two character counts
fn hit_count(baseline: &CharCounts, sample: &CharCounts) -> usize {
    baseline
        .iter()
        .map(|(ch, count)| count.min(sample.get(ch)))
        .sum()
}

/// Compute the character recall of a sample against a baseline
///
/// Recall is the multiset intersection size divided by the total number of
/// baseline characters. Returns 0.0 when the baseline is empty.
#[must_use]
pub fn recall_by_char(baseline: &CharCounts, sample: &CharCounts) -> f64 {
    let total = baseline.total();
    if total == 0 {
        return 0.0;
    }
    hit_count(baseline, sample) as f64 / total as f64
}

/// Compute the character precision of a sample against a baseline
///
/// Precision is the multiset intersection size divided by the total number of
/// sample characters. Returns 0.0 when the sample is empty.
#[must_use]
pub fn precision_by_char(baseline: &CharCounts, sample: &CharCounts) -> f64 {
    let total = sample.total();
    if total == 0 {
        return 0.0;
    }
    hit_count(baseline, sample) as f64 / total as f64
}
