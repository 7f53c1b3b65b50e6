// File: crates/nanochart-render-skia/src/render.rs
// Summary: Headless rendering of a chart layout using Skia CPU raster surfaces (PNG bytes/files and RGBA8 buffers).

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, trace};
use skia_safe as skia;

use nanochart_core::tooltip::place_tooltip;
use nanochart_core::{Chart, ChartLayout, HoverState, LabelPlacement, Rgba, Settings, TextAnchor};

use crate::text::TextShaper;
use crate::theme::Theme;

const TOOLTIP_PADDING: f32 = 6.0;
const LEGEND_SWATCH: f32 = 10.0;

pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub show_legend: bool,
    /// Height of the legend strip appended below the chart.
    pub legend_height: f32,
    /// Tooltip to draw, typically the result of `Chart::hover_at`.
    pub hover: Option<HoverState>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            draw_labels: true,
            show_legend: true,
            legend_height: 28.0,
            hover: None,
        }
    }
}

/// Raster output of a chart: a PNG file or buffer, or raw pixels.
pub trait SkiaRender {
    fn render_surface(&mut self, opts: &RenderOptions) -> Result<skia::Surface>;

    fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, stride)`.
    fn render_to_rgba8(&mut self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("read_pixels failed for {w}x{h} surface");
        }
        Ok((pixels, w, h, stride))
    }
}

impl SkiaRender for Chart {
    fn render_surface(&mut self, opts: &RenderOptions) -> Result<skia::Surface> {
        let layout = self.layout()?;
        render_layout(&layout, self.settings(), opts)
    }
}

/// Draw an already computed layout onto a fresh raster surface.
pub fn render_layout(layout: &ChartLayout, settings: &Settings, opts: &RenderOptions) -> Result<skia::Surface> {
    let legend_h = if opts.show_legend && !layout.legend.is_empty() { opts.legend_height.max(0.0) } else { 0.0 };
    let width = layout.width.ceil().max(1.0) as i32;
    let height = (layout.height as f32 + legend_h).ceil().max(1.0) as i32;

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let shaper = TextShaper::new();
    let font_size = layout.label_font_size as f32;

    // Plot contents live in viewport coordinates
    canvas.save();
    canvas.translate((layout.origin.0 as f32, layout.origin.1 as f32));
    draw_grid(canvas, layout);
    for s in &layout.series {
        if let (Some(fill), Some(area)) = (s.fill, s.area.as_ref()) {
            draw_area(canvas, area, fill);
        }
        draw_polyline(canvas, &s.line, s.stroke);
        draw_markers(canvas, s, opts.theme.background);
    }
    canvas.restore();

    if opts.draw_labels {
        for label in layout.x_labels.iter().chain(&layout.y_labels) {
            draw_label(canvas, &shaper, label, font_size, opts.theme.axis_label);
        }
    }
    if let Some(hover) = &opts.hover {
        draw_tooltip(canvas, &shaper, hover, layout, settings, opts);
    }
    if legend_h > 0.0 {
        draw_legend(canvas, &shaper, layout, settings, opts, legend_h);
    }

    debug!(
        "rendered {}x{} ({} series, legend {}, tooltip {})",
        width,
        height,
        layout.series.len(),
        legend_h > 0.0,
        opts.hover.is_some()
    );
    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn path_of(points: &[[f64; 2]], close: bool) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first[0] as f32, first[1] as f32));
    for p in rest {
        path.line_to((p[0] as f32, p[1] as f32));
    }
    if close {
        path.close();
    }
    Some(path)
}

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(layout.grid_color));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for line in &layout.grid {
        canvas.draw_line(
            (line.from[0] as f32, line.from[1] as f32),
            (line.to[0] as f32, line.to[1] as f32),
            &paint,
        );
    }
}

fn draw_area(canvas: &skia::Canvas, area: &[[f64; 2]], fill: Rgba) {
    let Some(path) = path_of(area, true) else { return };
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(fill));
    canvas.draw_path(&path, &paint);
}

fn draw_polyline(canvas: &skia::Canvas, line: &[[f64; 2]], color: Rgba) {
    if line.len() < 2 {
        return;
    }
    let Some(path) = path_of(line, false) else { return };
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(to_skia(color));
    canvas.draw_path(&path, &stroke);
}

fn draw_markers(canvas: &skia::Canvas, series: &nanochart_core::SeriesGeometry, background: skia::Color) {
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    ring.set_color(to_skia(series.stroke));

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(background);

    for m in &series.markers {
        if m.radius <= 0.0 {
            continue;
        }
        let center = (m.center[0] as f32, m.center[1] as f32);
        canvas.draw_circle(center, m.radius as f32, &dot);
        canvas.draw_circle(center, m.radius as f32, &ring);
    }
}

fn draw_label(canvas: &skia::Canvas, shaper: &TextShaper, label: &LabelPlacement, size: f32, color: skia::Color) {
    let text = match label.max_width {
        Some(max) => shaper.truncate(&label.text, size, max as f32),
        None => label.text.clone(),
    };
    if text.is_empty() {
        return;
    }
    trace!("label {:?} at ({}, {})", text, label.x, label.y);
    shaper.draw_anchored(canvas, &text, (label.x as f32, label.y as f32), size, color, label.anchor);
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    hover: &HoverState,
    layout: &ChartLayout,
    settings: &Settings,
    opts: &RenderOptions,
) {
    let size = layout.label_font_size as f32;
    let line_h = size * 1.4;
    let mut lines = Vec::with_capacity(hover.samples.len() + 1);
    lines.push(hover.label.clone());
    lines.extend(hover.samples.iter().map(|s| format!("{} - {}", s.key, s.value)));

    let text_w = lines.iter().map(|l| shaper.measure_width(l, size)).fold(0.0f32, f32::max);
    // samples carry a colour badge in front of the text
    let badge = if hover.samples.is_empty() { 0.0 } else { size * 0.8 + 4.0 };
    let w = text_w + badge + TOOLTIP_PADDING * 2.0;
    let h = line_h * lines.len() as f32 + TOOLTIP_PADDING * 2.0;

    let (x, y) = place_tooltip(
        hover.anchor,
        (f64::from(w), f64::from(h)),
        (layout.width, layout.height),
        settings,
    );
    let rect = skia::Rect::from_xywh(x as f32, y as f32, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(opts.theme.tooltip_background);
    canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(opts.theme.tooltip_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    if !opts.draw_labels {
        return;
    }
    let left = rect.left + TOOLTIP_PADDING;
    let mut cy = rect.top + TOOLTIP_PADDING + line_h / 2.0;
    shaper.draw_anchored(canvas, &lines[0], (left, cy), size, opts.theme.tooltip_text, TextAnchor::Start);
    for (sample, line) in hover.samples.iter().zip(&lines[1..]) {
        cy += line_h;
        let mut swatch = skia::Paint::default();
        swatch.set_color(to_skia(sample.color));
        let side = size * 0.8;
        canvas.draw_rect(skia::Rect::from_xywh(left, cy - side / 2.0, side, side), &swatch);
        shaper.draw_anchored(canvas, line, (left + badge, cy), size, opts.theme.tooltip_text, TextAnchor::Start);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &ChartLayout,
    settings: &Settings,
    opts: &RenderOptions,
    legend_h: f32,
) {
    let top = layout.height as f32;
    let mut bg = skia::Paint::default();
    bg.set_color(opts.theme.legend_background);
    canvas.draw_rect(skia::Rect::from_xywh(0.0, top, layout.width as f32, legend_h), &bg);

    let size = layout.label_font_size as f32;
    let cy = top + legend_h / 2.0;
    let mut x = settings.padding_h as f32;
    for entry in &layout.legend {
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_color(to_skia(entry.color));
        canvas.draw_circle((x + LEGEND_SWATCH / 2.0, cy), LEGEND_SWATCH / 2.0, &swatch);
        x += LEGEND_SWATCH + 6.0;
        if opts.draw_labels {
            shaper.draw_anchored(canvas, &entry.key, (x, cy), size, opts.theme.legend_text, TextAnchor::Start);
            x += shaper.measure_width(&entry.key, size) + 16.0;
        } else {
            x += 64.0;
        }
    }
}
