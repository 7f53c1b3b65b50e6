// File: crates/nanochart-core/src/legend.rs
// Summary: Legend entries (one per series) and their default markup.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::series::ChartData;
use crate::settings::Settings;
use crate::tooltip::escape_markup;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub key: String,
    pub color: Rgba,
}

/// Entries in series order, coloured like their lines.
pub fn legend_entries(data: &ChartData, settings: &Settings) -> Vec<LegendEntry> {
    data.series
        .iter()
        .map(|s| LegendEntry { key: s.key.clone(), color: s.stroke.unwrap_or(settings.stroke_color) })
        .collect()
}

pub fn legend_markup(class_name: &str, entries: &[LegendEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = write!(
            out,
            "<span class='{class_name}-legend-item'><span class='{class_name}-legend-item-badge' style='background-color: {c}; color: {c};'></span>{}</span>",
            escape_markup(&e.key),
            c = e.color,
        );
    }
    out
}
