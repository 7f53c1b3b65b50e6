// File: crates/nanochart-core/src/types.rs
// Summary: Shared value types (ranges, viewport, coordinates, label candidates) and size constants.

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 200;

/// Closed numeric interval `[min, max]`.
/// Contract: `min <= max` for every range accepted by projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn is_inverted(&self) -> bool { self.max < self.min }
    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Axis ranges governing one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangesConstraint {
    /// Ordinal label axis, always `{0, L-1}`.
    pub x_values: Range,
    /// Value axis after round-number extension.
    pub y_values: Range,
}

/// Drawable pixel area, net of padding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub width: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { height, width }
    }
}

/// `[x, y]` pixel pair with a top-left origin.
pub type ViewportCoordinate = [f64; 2];

/// A display value paired with its ordinal position on an axis.
/// `index` always refers to the original, unreduced sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelCandidate<T> {
    pub label: T,
    pub index: usize,
}

impl<T> LabelCandidate<T> {
    pub fn new(label: T, index: usize) -> Self { Self { label, index } }
}

/// Pair every item with its position.
pub fn map_labels<T, I>(items: I) -> Vec<LabelCandidate<T>>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, label)| LabelCandidate { label, index })
        .collect()
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin left/right and top/bottom.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}
