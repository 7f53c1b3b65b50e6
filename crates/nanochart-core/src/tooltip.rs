// File: crates/nanochart-core/src/tooltip.rs
// Summary: Hover tooltip content, default markup renderer and placement against the container edges.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::settings::Settings;
use crate::types::ViewportCoordinate;

/// One series' value at the hovered label.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipSample {
    pub key: String,
    pub value: String,
    pub color: Rgba,
}

/// Turns a hovered label and its samples into tooltip markup.
pub trait TooltipRenderer {
    fn render(&self, label: &str, samples: &[TooltipSample]) -> String;
}

impl<F> TooltipRenderer for F
where
    F: Fn(&str, &[TooltipSample]) -> String,
{
    fn render(&self, label: &str, samples: &[TooltipSample]) -> String { self(label, samples) }
}

/// Title plus one badge-prefixed `key - value` row per sample.
#[derive(Clone, Debug)]
pub struct DefaultTooltip {
    pub class_name: String,
}

impl DefaultTooltip {
    pub fn new(settings: &Settings) -> Self {
        Self { class_name: settings.css_class_name.clone() }
    }
}

impl TooltipRenderer for DefaultTooltip {
    fn render(&self, label: &str, samples: &[TooltipSample]) -> String {
        let class = &self.class_name;
        let mut out = format!("<header class=\"{class}-title\">{}</header>", escape_markup(label));
        for s in samples {
            let _ = write!(
                out,
                "<p class=\"{class}-item\"><span class=\"{class}-badge\" style=\"background-color: {};\"></span>{} - {}</p>",
                s.color,
                escape_markup(&s.key),
                escape_markup(&s.value),
            );
        }
        out
    }
}

pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Top-left corner for a tooltip of `size` (width, height) next to `anchor`.
///
/// `anchor` is in viewport coordinates; the result is in container coordinates.
/// The tooltip sticks to the top and bottom edges and flips to the left of the anchor
/// when it would overflow the right edge.
pub fn place_tooltip(
    anchor: ViewportCoordinate,
    size: (f64, f64),
    container: (f64, f64),
    settings: &Settings,
) -> (f64, f64) {
    let (w, h) = size;
    let (cw, ch) = container;
    let mut x = anchor[0] + settings.padding_h + settings.tooltip_offset_x;
    let mut y = anchor[1] + settings.padding_v - h / 2.0;
    if y < 0.0 {
        y = 0.0;
    }
    if y + h > ch {
        y = ch - h;
    }
    if x + w > cw {
        x = x - w - settings.tooltip_offset_x * 2.0;
    }
    (x, y)
}
