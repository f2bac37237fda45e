//! Page-number agreement metrics
//!
//! Each side of a comparison supplies one page-number list per retrieved
//! context. A context's pages count as recovered if *any* counterpart context
//! covers them, so per-item scores take the best overlap over the other side
//! rather than requiring one-to-one alignment of context order.

use crate::{Error, Result};
use std::collections::HashSet;

/// Best set-intersection size between `pages` and any list in `candidates`
fn best_overlap(pages: &HashSet<u32>, candidates: &[Vec<u32>]) -> usize {
    candidates
        .iter()
        .map(|candidate| pages.iter().filter(|&&p| candidate.contains(&p)).count())
        .max()
        .unwrap_or(0)
}

/// Compute page-number recall of sample lists against baseline lists
///
/// For each baseline list the hit count is the best set intersection with any
/// sample list, divided by the baseline list length; the overall recall is the
/// mean of the per-item values, or 0.0 when no baseline lists are given.
///
/// # Errors
///
/// Returns [`Error::EmptyPageNumbers`] when any baseline list is empty: an
/// empty page-number list is a contract violation, not a zero score.
pub fn recall_by_page_number(baseline: &[Vec<u32>], sample: &[Vec<u32>]) -> Result<f64> {
    let mut recalls = Vec::with_capacity(baseline.len());

    for pages in baseline {
        if pages.is_empty() {
            return Err(Error::EmptyPageNumbers { side: "baseline" });
        }

        let page_set: HashSet<u32> = pages.iter().copied().collect();
        let hits = best_overlap(&page_set, sample);
        recalls.push(hits as f64 / pages.len() as f64);
    }

    Ok(mean(&recalls))
}

/// Compute page-number precision of sample lists against baseline lists
///
/// Mirror image of [`recall_by_page_number`]: iterates the sample lists and
/// matches each against the best-overlapping baseline list.
///
/// # Errors
///
/// Returns [`Error::EmptyPageNumbers`] when any sample list is empty.
pub fn precision_by_page_number(baseline: &[Vec<u32>], sample: &[Vec<u32>]) -> Result<f64> {
    let mut precisions = Vec::with_capacity(sample.len());

    for pages in sample {
        if pages.is_empty() {
            return Err(Error::EmptyPageNumbers { side: "sample" });
        }

        let page_set: HashSet<u32> = pages.iter().copied().collect();
        let hits = best_overlap(&page_set, baseline);
        precisions.push(hits as f64 / pages.len() as f64);
    }

    Ok(mean(&precisions))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
