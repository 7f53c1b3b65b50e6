// File: crates/nanochart-core/src/view.rs
// Summary: Data range resolution over all series and the caller-held cache of the result.

use log::debug;

use crate::error::{ChartError, Result};
use crate::scale::extend_range;
use crate::series::Series;
use crate::types::{Range, RangesConstraint};

/// Bounding ranges for `series` plotted against `label_count` labels.
///
/// The value scan is seeded with the first sample of the first series, so equal
/// samples never widen past what `extend_range` itself produces.
pub fn resolve(series: &[Series], label_count: usize) -> Result<RangesConstraint> {
    let seed = series
        .first()
        .and_then(|s| s.samples.first())
        .copied()
        .ok_or(ChartError::EmptyInput)?;

    let mut y_min = seed;
    let mut y_max = seed;
    for s in series {
        for &v in &s.samples {
            if v > y_max { y_max = v; }
            if v < y_min { y_min = v; }
        }
    }

    let ranges = RangesConstraint {
        x_values: Range::new(0.0, label_count as f64 - 1.0),
        y_values: extend_range(Range::new(y_min, y_max)),
    };
    debug!(
        "resolved ranges: data y [{y_min}, {y_max}] -> axis y [{}, {}], x [0, {}]",
        ranges.y_values.min, ranges.y_values.max, ranges.x_values.max
    );
    Ok(ranges)
}

/// Explicitly invalidated slot holding the last resolved ranges.
///
/// The owner calls `invalidate` whenever the data is replaced or the viewport changes.
#[derive(Clone, Debug, Default)]
pub struct RangesCache {
    slot: Option<RangesConstraint>,
}

impl RangesCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_resolve(&mut self, series: &[Series], label_count: usize) -> Result<RangesConstraint> {
        if let Some(r) = self.slot {
            return Ok(r);
        }
        let r = resolve(series, label_count)?;
        self.slot = Some(r);
        Ok(r)
    }

    pub fn get(&self) -> Option<RangesConstraint> { self.slot }

    pub fn invalidate(&mut self) { self.slot = None; }

    pub fn is_cached(&self) -> bool { self.slot.is_some() }
}
