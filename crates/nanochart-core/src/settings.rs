// File: crates/nanochart-core/src/settings.rs
// Summary: Layout and interaction settings with defaults, JSON loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{ChartError, Result};
use crate::scale::ProjectionMode;
use crate::types::Insets;

/// All sizes are pixels; timeouts are milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub css_class_name: String,
    /// Series colour when a series sets none.
    pub stroke_color: Rgba,
    pub grid_color: Rgba,
    pub label_font_size: f64,
    pub max_label_height: f64,
    pub max_label_width: f64,
    pub mousemove_timeout: u64,
    pub overlay_overlap: f64,
    pub padding_h: f64,
    pub padding_v: f64,
    pub point_hover_radius: f64,
    pub point_radius: f64,
    pub resize_timeout: u64,
    pub tooltip_offset_x: f64,
    pub x_grid_overflow_size: f64,
    pub y_grid_overflow_size: f64,
    pub projection_mode: ProjectionMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            css_class_name: "nano-charts".to_string(),
            stroke_color: Rgba::rgb(0x6a, 0x6a, 0x6a),
            grid_color: Rgba::rgb(0xec, 0xec, 0xec),
            label_font_size: 12.0,
            max_label_height: 20.0,
            max_label_width: 60.0,
            mousemove_timeout: 50,
            overlay_overlap: 10.0,
            padding_h: 80.0,
            padding_v: 40.0,
            point_hover_radius: 4.0,
            point_radius: 2.0,
            resize_timeout: 300,
            tooltip_offset_x: 10.0,
            x_grid_overflow_size: 20.0,
            y_grid_overflow_size: 5.0,
            projection_mode: ProjectionMode::Linear,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("paddingH", self.padding_h),
            ("paddingV", self.padding_v),
            ("overlayOverlap", self.overlay_overlap),
            ("pointRadius", self.point_radius),
            ("pointHoverRadius", self.point_hover_radius),
            ("tooltipOffsetX", self.tooltip_offset_x),
            ("xGridOverflowSize", self.x_grid_overflow_size),
            ("yGridOverflowSize", self.y_grid_overflow_size),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ChartError::InvalidSettings(format!("{name} must be a non-negative number, got {v}")));
            }
        }
        let positive = [
            ("maxLabelWidth", self.max_label_width),
            ("maxLabelHeight", self.max_label_height),
            ("labelFontSize", self.label_font_size),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(ChartError::InvalidSettings(format!("{name} must be positive, got {v}")));
            }
        }
        Ok(())
    }

    pub fn padding(&self) -> Insets { Insets::symmetric(self.padding_h, self.padding_v) }

    pub fn mousemove_interval(&self) -> Duration { Duration::from_millis(self.mousemove_timeout) }

    pub fn resize_interval(&self) -> Duration { Duration::from_millis(self.resize_timeout) }
}
