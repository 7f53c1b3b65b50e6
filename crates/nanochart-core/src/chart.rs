// File: crates/nanochart-core/src/chart.rs
// Summary: Chart controller (data, size, cached ranges, hover state) and the render plan it produces.

use std::time::Instant;

use log::{debug, warn};

use crate::axis::{self, AxisTick};
use crate::color::Rgba;
use crate::error::{ChartError, Result};
use crate::geometry::{area_polygon, to_coordinate_with, to_coordinates_with, Rect};
use crate::legend::{legend_entries, LegendEntry};
use crate::schedule::{Debounce, Throttle};
use crate::series::ChartData;
use crate::settings::Settings;
use crate::tooltip::{DefaultTooltip, TooltipRenderer, TooltipSample};
use crate::types::{RangesConstraint, Viewport, ViewportCoordinate};
use crate::view::RangesCache;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text to draw, positioned in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    /// Labels wider than this are truncated by the renderer.
    pub max_width: Option<f64>,
}

/// Straight segment in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: ViewportCoordinate,
    pub to: ViewportCoordinate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: ViewportCoordinate,
    pub radius: f64,
}

/// Everything needed to draw one series, in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub key: String,
    pub stroke: Rgba,
    pub fill: Option<Rgba>,
    pub line: Vec<ViewportCoordinate>,
    pub markers: Vec<Marker>,
    /// Closed polygon under the line, present when the series has a fill.
    pub area: Option<Vec<ViewportCoordinate>>,
}

/// One render pass worth of geometry.
///
/// Viewport coordinates are relative to `origin`; label placements are already in
/// container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub origin: (f64, f64),
    pub viewport: Viewport,
    pub ranges: RangesConstraint,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_labels: Vec<LabelPlacement>,
    pub y_labels: Vec<LabelPlacement>,
    pub grid: Vec<GridLine>,
    pub grid_color: Rgba,
    pub label_font_size: f64,
    pub series: Vec<SeriesGeometry>,
    pub legend: Vec<LegendEntry>,
}

/// Result of hovering the chart at some horizontal offset.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverState {
    pub index: usize,
    pub label: String,
    pub samples: Vec<TooltipSample>,
    /// Projection of the mean sample value at `index`, in viewport coordinates.
    pub anchor: ViewportCoordinate,
    pub markup: String,
}

pub struct Chart {
    settings: Settings,
    data: ChartData,
    width: f64,
    height: f64,
    ranges: RangesCache,
    hovered: bool,
    hovered_index: Option<usize>,
    move_throttle: Throttle,
    pending_resize: Debounce<(f64, f64)>,
    tooltip: Box<dyn TooltipRenderer>,
    destroyed: bool,
}

impl Chart {
    pub fn new(settings: Settings, width: f64, height: f64) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            move_throttle: Throttle::new(settings.mousemove_interval()),
            pending_resize: Debounce::new(settings.resize_interval()),
            tooltip: Box::new(DefaultTooltip::new(&settings)),
            settings,
            data: ChartData::default(),
            width,
            height,
            ranges: RangesCache::new(),
            hovered: false,
            hovered_index: None,
            destroyed: false,
        })
    }

    /// Replace all data. Cached ranges and the highlighted index are dropped.
    pub fn set_data(&mut self, data: ChartData) -> Result<()> {
        self.ensure_alive()?;
        data.validate()?;
        debug!("chart data: {} series x {} labels", data.series.len(), data.labels.len());
        self.data = data;
        self.ranges.invalidate();
        self.hovered_index = None;
        Ok(())
    }

    pub fn data(&self) -> &ChartData { &self.data }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn size(&self) -> (f64, f64) { (self.width, self.height) }

    pub fn set_tooltip_renderer(&mut self, renderer: impl TooltipRenderer + 'static) {
        self.tooltip = Box::new(renderer);
    }

    /// Apply a new container size right away.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.ranges.invalidate();
        self.pending_resize.cancel();
    }

    /// Queue a resize; it is applied by `poll_resize` once no newer request arrived
    /// within `resizeTimeout`.
    pub fn request_resize(&mut self, width: f64, height: f64, now: Instant) {
        self.pending_resize.request((width, height), now);
    }

    /// Returns true when a queued resize was applied and the chart needs a redraw.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        match self.pending_resize.poll(now) {
            Some((w, h)) => {
                self.resize(w, h);
                true
            }
            None => false,
        }
    }

    /// Drawable area: the container minus padding on every side.
    pub fn padded_viewport(&self) -> Viewport {
        let p = self.settings.padding();
        Viewport::new((self.width - p.hsum()).max(0.0), (self.height - p.vsum()).max(0.0))
    }

    /// Region that tracks pointer events, slightly larger than the viewport.
    pub fn overlay_bounds(&self) -> Rect {
        let s = &self.settings;
        let dx = s.padding_h - s.overlay_overlap;
        let dy = s.padding_v - s.overlay_overlap;
        Rect::from_ltrb(dx, dy, self.width - dx, self.height - dy)
    }

    /// Ranges for the current data, resolved once per data/size change.
    pub fn ranges(&mut self) -> Result<RangesConstraint> {
        self.ensure_alive()?;
        self.ranges.get_or_resolve(&self.data.series, self.data.labels.len())
    }

    pub fn invalidate(&mut self) { self.ranges.invalidate(); }

    pub fn layout(&mut self) -> Result<ChartLayout> {
        let ranges = self.ranges()?;
        let s = &self.settings;
        let vp = self.padded_viewport();
        let mode = s.projection_mode;

        let x_ticks = axis::x_ticks(&self.data.labels, vp, s)?;
        let y_ticks = axis::y_ticks(&ranges, vp, s)?;

        let mut grid = Vec::with_capacity(x_ticks.len() + y_ticks.len());
        for t in &x_ticks {
            grid.push(GridLine {
                from: [t.offset, -s.y_grid_overflow_size],
                to: [t.offset, vp.height + s.y_grid_overflow_size],
            });
        }
        for t in &y_ticks {
            let y = vp.height - t.offset;
            grid.push(GridLine { from: [-s.x_grid_overflow_size, y], to: [vp.width + s.x_grid_overflow_size, y] });
        }

        let x_labels = x_ticks
            .iter()
            .map(|t| LabelPlacement {
                text: t.text.clone(),
                x: t.offset + s.padding_h,
                // middle of the bottom padding
                y: vp.height + s.padding_v * 1.5,
                anchor: TextAnchor::Middle,
                max_width: Some(s.max_label_width),
            })
            .collect();
        let y_labels = y_ticks
            .iter()
            .map(|t| LabelPlacement {
                text: t.text.clone(),
                x: s.padding_h / 2.0,
                y: vp.height - t.offset + s.padding_v,
                anchor: TextAnchor::End,
                max_width: None,
            })
            .collect();

        let mut series = Vec::with_capacity(self.data.series.len());
        for item in &self.data.series {
            let line = to_coordinates_with(mode, &item.samples, vp, &ranges)?;
            let markers = line
                .iter()
                .enumerate()
                .map(|(i, &center)| Marker {
                    center,
                    radius: if self.hovered_index == Some(i) { s.point_hover_radius } else { s.point_radius },
                })
                .collect();
            let area = match item.fill {
                Some(_) => Some(area_polygon(mode, &line, vp, &ranges)?),
                None => None,
            };
            series.push(SeriesGeometry {
                key: item.key.clone(),
                stroke: item.stroke.unwrap_or(s.stroke_color),
                fill: item.fill,
                line,
                markers,
                area,
            });
        }

        debug!(
            "layout {}x{}: {} x ticks, {} y ticks, {} series",
            self.width, self.height, x_ticks.len(), y_ticks.len(), series.len()
        );

        Ok(ChartLayout {
            width: self.width,
            height: self.height,
            origin: (s.padding_h, s.padding_v),
            viewport: vp,
            ranges,
            x_ticks,
            y_ticks,
            x_labels,
            y_labels,
            grid,
            grid_color: s.grid_color,
            label_font_size: s.label_font_size,
            series,
            legend: legend_entries(&self.data, s),
        })
    }

    /// Closest label index for a horizontal offset in container coordinates.
    /// `None` when there are no labels.
    pub fn index_for_x_offset(&self, x: f64) -> Option<usize> {
        let max_index = self.data.labels.len().checked_sub(1)?;
        let total = self.padded_viewport().width;
        if total <= 0.0 {
            return Some(0);
        }
        let position = x - self.settings.padding_h;
        let percentage = (position / total * 100.0).ceil();
        if percentage < 0.0 {
            return Some(0);
        }
        if percentage > 100.0 {
            return Some(max_index);
        }
        Some((max_index as f64 / 100.0 * percentage).round() as usize)
    }

    /// Every series' sample at `index`, in series order.
    pub fn samples_at(&self, index: usize) -> Vec<TooltipSample> {
        self.data
            .series
            .iter()
            .filter_map(|s| {
                s.samples.get(index).map(|v| TooltipSample {
                    key: s.key.clone(),
                    value: v.to_string(),
                    color: s.stroke.unwrap_or(self.settings.stroke_color),
                })
            })
            .collect()
    }

    pub fn pointer_enter(&mut self) { self.hovered = true; }

    pub fn pointer_leave(&mut self) { self.hovered = false; }

    pub fn is_hovered(&self) -> bool { self.hovered }

    pub fn hovered_index(&self) -> Option<usize> { self.hovered_index }

    /// Pointer move, rate-limited by `mousemoveTimeout`. Dropped moves return `Ok(None)`.
    pub fn pointer_move(&mut self, x: f64, now: Instant) -> Result<Option<HoverState>> {
        if !self.move_throttle.try_fire(now) {
            return Ok(None);
        }
        self.hover_at(x)
    }

    /// Highlight the label closest to `x` and build its tooltip. Does nothing unless
    /// the pointer is inside the chart.
    pub fn hover_at(&mut self, x: f64) -> Result<Option<HoverState>> {
        self.ensure_alive()?;
        if !self.hovered {
            return Ok(None);
        }
        let Some(index) = self.index_for_x_offset(x) else {
            warn!("hover at {x} ignored: chart has no labels");
            return Ok(None);
        };
        let label = self.data.labels.get(index).cloned().unwrap_or_default();
        let samples = self.samples_at(index);
        let values: Vec<f64> = self.data.series.iter().filter_map(|s| s.samples.get(index).copied()).collect();
        if values.is_empty() {
            return Err(ChartError::EmptyInput);
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let ranges = self.ranges()?;
        let anchor = to_coordinate_with(
            self.settings.projection_mode,
            index as f64,
            mean,
            self.padded_viewport(),
            &ranges,
        )?;
        let markup = self.tooltip.render(&label, &samples);
        self.hovered_index = Some(index);
        Ok(Some(HoverState { index, label, samples, anchor, markup }))
    }

    /// Drop the data and stop answering layout/hover calls. Calling twice is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.data = ChartData::default();
        self.ranges.invalidate();
        self.hovered = false;
        self.hovered_index = None;
        self.pending_resize.cancel();
        self.move_throttle.reset();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool { self.destroyed }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed { Err(ChartError::Destroyed) } else { Ok(()) }
    }
}
