// File: crates/nanochart-core/src/error.rs
// Summary: Error taxonomy for range math, data resolution, layout and settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A projected value lies outside its base interval.
    #[error("value {value} is not within the range [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    /// An interval with `max < min`.
    #[error("invalid range: max {max} is below min {min}")]
    InvertedRange { min: f64, max: f64 },

    #[error("no samples to resolve a range from")]
    EmptyInput,

    #[error("series '{key}' has {found} samples, expected {expected}")]
    MalformedSeries { key: String, expected: usize, found: usize },

    #[error("series key '{0}' is used more than once")]
    DuplicateSeries(String),

    #[error("series '{key}' holds a non-finite sample at index {index}")]
    NonFiniteSample { key: String, index: usize },

    /// Even a single label does not fit the available pixel budget.
    #[error("one label needs {needed}px but only {available}px are available")]
    LabelBudgetExceeded { needed: f64, available: f64 },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("chart was destroyed")]
    Destroyed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
