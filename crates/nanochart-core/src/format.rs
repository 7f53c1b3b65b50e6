// File: crates/nanochart-core/src/format.rs
// Summary: Compact number formatting for axis labels (k / m / b / t suffixes).

const SUFFIXES: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "t"),
    (1_000_000_000.0, "b"),
    (1_000_000.0, "m"),
    (1_000.0, "k"),
];

/// Number of decimal digits in the integer part of `|value|` (zero has one).
fn digit_count(value: f64) -> usize {
    format!("{}", value.abs().trunc()).len()
}

/// Scale `value` down by the largest power of 1000 its digit count reaches and
/// append the matching suffix: `99100 -> "99.1k"`, `-200 -> "-200"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = 10f64.powi(digit_count(value) as i32 - 1);
    for (scale, suffix) in SUFFIXES {
        if magnitude >= scale {
            return format!("{}{suffix}", value / scale);
        }
    }
    value.to_string()
}
