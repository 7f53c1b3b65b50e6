// File: crates/nanochart-core/src/geometry.rs
// Summary: Projection of (label index, value) pairs into viewport pixels, plus path helpers.

use std::fmt::Write as _;

use crate::error::Result;
use crate::scale::{calculate_range_projection_with, ProjectionMode};
use crate::types::{Range, RangesConstraint, Viewport, ViewportCoordinate};

/// Pixel position of sample `value` at label `index`, using the linear projection.
pub fn to_coordinate(
    index: f64,
    value: f64,
    viewport: Viewport,
    ranges: &RangesConstraint,
) -> Result<ViewportCoordinate> {
    to_coordinate_with(ProjectionMode::Linear, index, value, viewport, ranges)
}

/// Pixel position of sample `value` at label `index`.
/// The y axis is flipped: data grows upwards, pixels grow downwards.
pub fn to_coordinate_with(
    mode: ProjectionMode,
    index: f64,
    value: f64,
    viewport: Viewport,
    ranges: &RangesConstraint,
) -> Result<ViewportCoordinate> {
    let x_px = Range::new(0.0, viewport.width);
    let y_px = Range::new(0.0, viewport.height);
    let x = calculate_range_projection_with(mode, ranges.x_values, x_px, index)?;
    let y = calculate_range_projection_with(mode, ranges.y_values, y_px, value)?;
    Ok([x, viewport.height - y])
}

/// One coordinate per sample, in order, each at its ordinal index.
pub fn to_coordinates(
    samples: &[f64],
    viewport: Viewport,
    ranges: &RangesConstraint,
) -> Result<Vec<ViewportCoordinate>> {
    to_coordinates_with(ProjectionMode::Linear, samples, viewport, ranges)
}

pub fn to_coordinates_with(
    mode: ProjectionMode,
    samples: &[f64],
    viewport: Viewport,
    ranges: &RangesConstraint,
) -> Result<Vec<ViewportCoordinate>> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| to_coordinate_with(mode, i as f64, v, viewport, ranges))
        .collect()
}

/// Closed polygon under a projected line: the line itself, then the bottom of the
/// value axis at the last and first index.
pub fn area_polygon(
    mode: ProjectionMode,
    line: &[ViewportCoordinate],
    viewport: Viewport,
    ranges: &RangesConstraint,
) -> Result<Vec<ViewportCoordinate>> {
    let Some(last) = line.len().checked_sub(1) else {
        return Ok(Vec::new());
    };
    let floor = ranges.y_values.min;
    let mut out = Vec::with_capacity(line.len() + 2);
    out.extend_from_slice(line);
    out.push(to_coordinate_with(mode, last as f64, floor, viewport, ranges)?);
    out.push(to_coordinate_with(mode, 0.0, floor, viewport, ranges)?);
    Ok(out)
}

/// SVG-style path data: `M x y L x y ...`.
pub fn convert_to_path(coordinates: &[ViewportCoordinate]) -> String {
    let mut out = String::new();
    for (i, [x, y]) in coordinates.iter().enumerate() {
        if i > 0 { out.push(' '); }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{cmd} {x} {y}");
    }
    out
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
