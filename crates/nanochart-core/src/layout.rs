// File: crates/nanochart-core/src/layout.rs
// Summary: Label density reduction against a pixel budget, and width-driven label truncation.

use log::{debug, trace};

use crate::error::{ChartError, Result};

/// Pixel budget for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBudget {
    /// Estimated footprint of a single label along the axis.
    pub per_label: f64,
    /// Pixels available along the axis, overflow allowance included.
    pub available: f64,
}

impl LabelBudget {
    pub const fn new(per_label: f64, available: f64) -> Self {
        Self { per_label, available }
    }

    pub fn used(&self, count: usize) -> f64 { count as f64 * self.per_label }

    pub fn fits(&self, count: usize) -> bool { self.used(count) <= self.available }
}

/// Keep the first item and every item at an even position.
pub fn reduce_collection<T>(collection: Vec<T>) -> Vec<T> {
    collection
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, item)| item)
        .collect()
}

/// Thin `candidates` until their footprint fits `budget`.
///
/// Items keep whatever they carry (typically their original index), so survivors stay
/// addressable on the unreduced scale. Fails when a single item still overflows.
pub fn fit_labels<T>(candidates: Vec<T>, budget: LabelBudget) -> Result<Vec<T>> {
    let total = candidates.len();
    let mut current = candidates;
    let mut passes = 0usize;
    while !budget.fits(current.len()) {
        if current.len() <= 1 {
            return Err(ChartError::LabelBudgetExceeded {
                needed: budget.used(current.len()),
                available: budget.available,
            });
        }
        current = reduce_collection(current);
        passes += 1;
        trace!("label pass {passes}: {} left, {}px of {}px", current.len(), budget.used(current.len()), budget.available);
    }
    if passes > 0 {
        debug!("reduced {total} labels to {} in {passes} passes", current.len());
    }
    Ok(current)
}

const ELLIPSIS: &str = "...";

/// Drop trailing characters (appending an ellipsis) until `measure` reports a width
/// within `max_width`, or nothing of the original text is left.
pub fn truncate_label<F>(text: &str, max_width: f64, mut measure: F) -> String
where
    F: FnMut(&str) -> f64,
{
    let chars: Vec<char> = text.chars().collect();
    let mut shown = text.to_string();
    let mut truncated = 0usize;
    while max_width < measure(&shown) {
        if truncated == chars.len() {
            break;
        }
        truncated += 1;
        shown = chars[..chars.len() - truncated].iter().collect::<String>() + ELLIPSIS;
    }
    shown
}
