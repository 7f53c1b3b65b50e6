// File: crates/nanochart-render-skia/src/theme.rs
// Summary: Surface themes: background, label, tooltip and legend colours. Series and grid colours come from Settings.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_label: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
    pub legend_background: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0), // rgba(0, 0, 0, 0.8)
            tooltip_border: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 0xfa, 0xfa, 0xfa),
            legend_background: skia::Color::from_argb(255, 0xf9, 0xf9, 0xf9),
            legend_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_border: skia::Color::from_argb(255, 180, 180, 190),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(255, 28, 28, 32),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_border: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
