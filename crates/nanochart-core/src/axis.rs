// File: crates/nanochart-core/src/axis.rs
// Summary: Axis tick selection and placement for the ordinal label axis and the value axis.

use crate::error::Result;
use crate::format::format_number;
use crate::layout::{fit_labels, LabelBudget};
use crate::scale::values_for_range;
use crate::settings::Settings;
use crate::types::{map_labels, RangesConstraint, Viewport};

/// A label that survived density reduction, placed along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Position in the unreduced candidate sequence.
    pub index: usize,
    /// Distance from the axis origin in viewport pixels: from the left edge for x,
    /// from the bottom edge for y.
    pub offset: f64,
    pub text: String,
}

/// Offset of candidate `index` when `total` candidates are spread over `length` pixels.
fn spread(length: f64, total: usize, index: usize) -> f64 {
    if total < 2 {
        return 0.0;
    }
    length / (total - 1) as f64 * index as f64
}

pub fn x_budget(viewport: Viewport, settings: &Settings) -> LabelBudget {
    LabelBudget::new(settings.max_label_width, viewport.width + settings.x_grid_overflow_size * 2.0)
}

pub fn y_budget(viewport: Viewport, settings: &Settings) -> LabelBudget {
    LabelBudget::new(settings.max_label_height, viewport.height + settings.y_grid_overflow_size * 2.0)
}

/// Category labels that fit the horizontal budget, spaced by their original index.
pub fn x_ticks(labels: &[String], viewport: Viewport, settings: &Settings) -> Result<Vec<AxisTick>> {
    let total = labels.len();
    let kept = fit_labels(map_labels(labels.iter()), x_budget(viewport, settings))?;
    Ok(kept
        .into_iter()
        .map(|c| AxisTick {
            index: c.index,
            offset: spread(viewport.width, total, c.index),
            text: c.label.clone(),
        })
        .collect())
}

/// Nice value-axis ticks that fit the vertical budget, formatted for display.
pub fn y_ticks(ranges: &RangesConstraint, viewport: Viewport, settings: &Settings) -> Result<Vec<AxisTick>> {
    let values = values_for_range(ranges.y_values);
    let total = values.len();
    let kept = fit_labels(map_labels(values), y_budget(viewport, settings))?;
    Ok(kept
        .into_iter()
        .map(|c| AxisTick {
            index: c.index,
            offset: spread(viewport.height, total, c.index),
            text: format_number(c.label),
        })
        .collect())
}
