// File: crates/nanochart-core/src/scale.rs
// Summary: Range math: round-number range extension, nice tick values and linear range projection.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::Range;

/// How a value's distance from the base interval start is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// `value - base.min`: a plain linear map.
    #[default]
    Linear,
    /// Distance is `value - base.min` for negative values and
    /// `value - |base.min|` otherwise. Only exact for bases starting at or above zero;
    /// kept for charts that must match earlier renders pixel for pixel.
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Round {
    Floor,
    Ceil,
}

/// Move `n` away from its leading digit by one unit of that digit's magnitude.
/// Zero and non-finite inputs are returned as-is.
fn extend_number(n: f64, round: Round) -> f64 {
    if n == 0.0 || !n.is_finite() {
        return n;
    }
    // f64 Display never switches to exponent notation, so this is the plain integer part.
    let digits = format!("{}", n.abs().floor());
    let leading = digits
        .bytes()
        .next()
        .map(|b| f64::from(b - b'0'))
        .unwrap_or(0.0);
    let first = leading * n.signum();
    let first = match round {
        Round::Floor => first - 1.0,
        Round::Ceil => first + 1.0,
    };
    first * 10f64.powi(digits.len() as i32 - 1)
}

/// Widen a range to round numbers: `min` floors, `max` ceils on its leading digit.
///
/// `{-10, 110}` becomes `{-20, 200}`, `{21, 99}` becomes `{10, 100}`.
pub fn extend_range(range: Range) -> Range {
    Range {
        min: extend_number(range.min, Round::Floor),
        max: extend_number(range.max, Round::Ceil),
    }
}

/// Dividers considered nice: values like 0, 5, 10, 15 read well.
const NICE_DIVIDERS: [f64; 2] = [2.0, 5.0];
const MAX_SUBDIVISIONS: u32 = 10;

/// Evenly spaced tick values from `min` to `max` inclusive.
///
/// Spans below one are not subdivided. Otherwise the subdivision count is the last
/// candidate in `[2, 5] x 1..=10` whose step is a multiple of the divider; interior
/// ticks are floored, the endpoints are kept verbatim.
pub fn values_for_range(range: Range) -> Vec<f64> {
    let diff = range.max - range.min;
    if diff < 1.0 {
        return vec![range.min, range.max];
    }

    let mut steps = 2u32;
    let mut step = diff / f64::from(steps);
    for divider in NICE_DIVIDERS {
        for count in 1..=MAX_SUBDIVISIONS {
            let candidate = diff / f64::from(count);
            if candidate % divider == 0.0 {
                steps = count;
                step = candidate;
            }
        }
    }

    let mut out = Vec::with_capacity(steps as usize + 1);
    out.push(range.min);
    let mut current = range.min;
    for _ in 1..steps {
        current += step;
        out.push(current.floor());
    }
    out.push(range.max);
    out
}

/// Map `value` from `base` into `target` linearly.
pub fn calculate_range_projection(base: Range, target: Range, value: f64) -> Result<f64> {
    calculate_range_projection_with(ProjectionMode::Linear, base, target, value)
}

/// Map `value` from `base` into `target` using the given distance rule.
///
/// Fails when `value` lies outside `base` or either range is inverted. Endpoints map
/// exactly: `base.min -> target.min`, `base.max -> target.max`.
pub fn calculate_range_projection_with(
    mode: ProjectionMode,
    base: Range,
    target: Range,
    value: f64,
) -> Result<f64> {
    if !base.contains(value) {
        return Err(ChartError::ValueOutOfRange { value, min: base.min, max: base.max });
    }
    if base.is_inverted() {
        return Err(ChartError::InvertedRange { min: base.min, max: base.max });
    }
    if target.is_inverted() {
        return Err(ChartError::InvertedRange { min: target.min, max: target.max });
    }

    if value == base.min {
        return Ok(target.min);
    }
    if value == base.max {
        return Ok(target.max);
    }

    let delta = match mode {
        ProjectionMode::Linear => value - base.min,
        ProjectionMode::Legacy if value < 0.0 => value - base.min,
        ProjectionMode::Legacy => value - base.min.abs(),
    };
    let coefficient = delta.abs() / base.span();
    Ok(target.min + target.span() * coefficient)
}
