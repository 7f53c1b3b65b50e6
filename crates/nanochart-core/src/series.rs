// File: crates/nanochart-core/src/series.rs
// Summary: Series model: keyed sample sequences sharing one ordinal label axis.
// Notes:
// - Keys keep insertion order; range resolution seeds from the first series.
// - All series must have as many samples as there are labels. `ChartData::validate`
//   checks this; the pure range/projection functions assume it.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub samples: Vec<f64>,
    /// Line and marker colour; falls back to `Settings::stroke_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgba>,
    /// When set, the area under the line is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
}

impl Series {
    pub fn new(key: impl Into<String>, samples: Vec<f64>) -> Self {
        Self { key: key.into(), samples, stroke: None, fill: None }
    }

    pub fn with_stroke(mut self, color: Rgba) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Labels plus every series plotted against them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, series: Vec::new() }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn get(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.series.first().map_or(true, |s| s.samples.is_empty())
    }

    /// Parse `{"labels": [...], "series": [{"key", "samples", "stroke"?, "fill"?}]}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(s)?;
        data.validate()?;
        Ok(data)
    }

    /// Fail fast on shapes that would otherwise turn into NaN geometry.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ChartError::EmptyInput);
        }
        let expected = self.labels.len();
        for (i, s) in self.series.iter().enumerate() {
            if s.samples.len() != expected {
                return Err(ChartError::MalformedSeries {
                    key: s.key.clone(),
                    expected,
                    found: s.samples.len(),
                });
            }
            if self.series[..i].iter().any(|prev| prev.key == s.key) {
                return Err(ChartError::DuplicateSeries(s.key.clone()));
            }
            if let Some(index) = s.samples.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteSample { key: s.key.clone(), index });
            }
        }
        Ok(())
    }
}
