// File: crates/nanochart-core/tests/chart.rs
// Purpose: Chart controller end to end: layout plan, hover highlighting, resize and teardown.

use std::time::{Duration, Instant};

use nanochart_core::{
    place_tooltip, Chart, ChartData, ChartError, ProjectionMode, Range, Rgba, Series, Settings, TooltipSample,
};

fn chart_data() -> ChartData {
    ChartData::new(vec!["January".into(), "February".into(), "March".into()])
        .with_series(Series::new("Metric A", vec![0.0, 5.0, 10.0]).with_stroke(Rgba::rgb(0xee, 0x82, 0xee)))
        .with_series(Series::new("Metric B", vec![-10.0, 5.0, 20.0]))
}

fn chart() -> Chart {
    let mut chart = Chart::new(Settings::default(), 1000.0, 200.0).expect("chart");
    chart.set_data(chart_data()).expect("data");
    chart
}

fn radii(chart: &mut Chart) -> Vec<f64> {
    let layout = chart.layout().expect("layout");
    layout.series.iter().flat_map(|s| s.markers.iter().map(|m| m.radius)).collect()
}

#[test]
fn layout_matches_reference_chart() {
    let mut chart = chart();
    let layout = chart.layout().unwrap();

    assert_eq!(layout.viewport.width, 840.0);
    assert_eq!(layout.viewport.height, 120.0);
    assert_eq!(layout.origin, (80.0, 40.0));
    assert_eq!(layout.ranges.y_values, Range::new(-20.0, 30.0));
    assert_eq!(layout.ranges.x_values, Range::new(0.0, 2.0));

    assert_eq!(layout.x_ticks.len(), 3);
    assert_eq!(layout.y_ticks.len(), 6);
    assert_eq!(layout.grid.len(), 9);

    let a = &layout.series[0];
    assert_eq!(a.line, vec![[0.0, 72.0], [420.0, 60.0], [840.0, 48.0]]);
    assert_eq!(a.stroke, Rgba::rgb(0xee, 0x82, 0xee));
    assert!(a.area.is_none());

    let b = &layout.series[1];
    assert_eq!(b.line, vec![[0.0, 96.0], [420.0, 60.0], [840.0, 24.0]]);
    assert_eq!(b.stroke, Settings::default().stroke_color);
}

#[test]
fn label_placements_follow_padding() {
    let mut chart = chart();
    let layout = chart.layout().unwrap();

    let jan = &layout.x_labels[0];
    assert_eq!((jan.x, jan.y), (80.0, 180.0));
    assert_eq!(jan.max_width, Some(60.0));

    let top = layout.y_labels.last().unwrap();
    assert_eq!(top.text, "30");
    assert_eq!((top.x, top.y), (40.0, 40.0));
    let bottom = &layout.y_labels[0];
    assert_eq!((bottom.text.as_str(), bottom.y), ("-20", 160.0));
}

#[test]
fn grid_lines_overflow_the_viewport() {
    let mut chart = chart();
    let layout = chart.layout().unwrap();
    let vertical = layout.grid[0];
    assert_eq!(vertical.from, [0.0, -5.0]);
    assert_eq!(vertical.to, [0.0, 125.0]);
    let horizontal = layout.grid[3];
    assert_eq!(horizontal.from, [-20.0, 120.0]);
    assert_eq!(horizontal.to, [860.0, 120.0]);
}

#[test]
fn fill_adds_closed_area() {
    let mut data = chart_data();
    data.series[1].fill = Some(Rgba::rgba(0, 0, 255, 64));
    let mut chart = Chart::new(Settings::default(), 1000.0, 200.0).unwrap();
    chart.set_data(data).unwrap();
    let layout = chart.layout().unwrap();
    let area = layout.series[1].area.as_ref().expect("area");
    assert_eq!(area.len(), 5);
    assert_eq!(area[3], [840.0, 120.0]);
    assert_eq!(area[4], [0.0, 120.0]);
}

#[test]
fn hover_highlights_points_at_index() {
    let mut chart = chart();
    assert_eq!(radii(&mut chart), vec![2.0; 6]);

    // not hovered yet: nothing happens
    assert!(chart.hover_at(0.0).unwrap().is_none());

    chart.pointer_enter();
    let state = chart.hover_at(0.0).unwrap().expect("hover");
    assert_eq!(state.index, 0);
    assert_eq!(radii(&mut chart), vec![4.0, 2.0, 2.0, 4.0, 2.0, 2.0]);

    chart.hover_at(500.0).unwrap();
    assert_eq!(radii(&mut chart), vec![2.0, 4.0, 2.0, 2.0, 4.0, 2.0]);

    chart.hover_at(1000.0).unwrap();
    assert_eq!(radii(&mut chart), vec![2.0, 2.0, 4.0, 2.0, 2.0, 4.0]);
}

#[test]
fn hover_reports_samples_and_mean_anchor() {
    let mut chart = chart();
    chart.pointer_enter();
    let state = chart.hover_at(1000.0).unwrap().unwrap();
    assert_eq!(state.label, "March");
    assert_eq!(
        state.samples,
        vec![
            TooltipSample { key: "Metric A".into(), value: "10".into(), color: Rgba::rgb(0xee, 0x82, 0xee) },
            TooltipSample { key: "Metric B".into(), value: "20".into(), color: Settings::default().stroke_color },
        ]
    );
    // mean 15 on [-20, 30] over 120px
    assert_eq!(state.anchor, [840.0, 36.0]);
    assert!(state.markup.contains("nano-charts-title\">March<"));
    assert!(state.markup.contains("Metric B - 20"));

    chart.pointer_leave();
    assert!(chart.hover_at(0.0).unwrap().is_none());
}

#[test]
fn custom_tooltip_renderer() {
    let mut chart = chart();
    chart.set_tooltip_renderer(|label: &str, samples: &[TooltipSample]| format!("{label}:{}", samples.len()));
    chart.pointer_enter();
    let state = chart.hover_at(500.0).unwrap().unwrap();
    assert_eq!(state.markup, "February:2");
}

#[test]
fn pointer_moves_are_throttled() {
    let mut chart = chart();
    chart.pointer_enter();
    let t0 = Instant::now();
    assert!(chart.pointer_move(0.0, t0).unwrap().is_some());
    assert!(chart.pointer_move(1000.0, t0 + Duration::from_millis(10)).unwrap().is_none());
    assert_eq!(chart.hovered_index(), Some(0));
    let later = chart.pointer_move(1000.0, t0 + Duration::from_millis(60)).unwrap();
    assert_eq!(later.map(|s| s.index), Some(2));
}

#[test]
fn debounced_resize_recomputes_layout() {
    let mut chart = chart();
    let t0 = Instant::now();
    chart.request_resize(900.0, 200.0, t0);
    chart.request_resize(800.0, 200.0, t0 + Duration::from_millis(100));
    assert!(!chart.poll_resize(t0 + Duration::from_millis(350)));
    assert_eq!(chart.size(), (1000.0, 200.0));
    assert!(chart.poll_resize(t0 + Duration::from_millis(400)));
    assert_eq!(chart.size(), (800.0, 200.0));

    let layout = chart.layout().unwrap();
    assert_eq!(layout.viewport.width, 640.0);
    assert_eq!(layout.series[0].line[2], [640.0, 48.0]);
}

#[test]
fn legacy_projection_is_selectable() {
    let settings = Settings { projection_mode: ProjectionMode::Legacy, ..Settings::default() };
    let mut chart = Chart::new(settings, 1000.0, 200.0).unwrap();
    chart.set_data(chart_data()).unwrap();
    let layout = chart.layout().unwrap();
    // 10 measures |10 - 20| = 10 of 50 units
    assert_eq!(layout.series[0].line[2], [840.0, 96.0]);
}

#[test]
fn empty_chart_has_no_layout() {
    let mut chart = Chart::new(Settings::default(), 1000.0, 200.0).unwrap();
    assert!(matches!(chart.layout(), Err(ChartError::EmptyInput)));
    assert_eq!(chart.index_for_x_offset(500.0), None);
}

#[test]
fn set_data_rejects_unequal_lengths() {
    let mut chart = chart();
    let bad = ChartData::new(vec!["a".into(), "b".into()]).with_series(Series::new("x", vec![1.0]));
    assert!(matches!(chart.set_data(bad), Err(ChartError::MalformedSeries { .. })));
    // previous data survives the failed update
    assert_eq!(chart.data().series.len(), 2);
}

#[test]
fn destroy_is_idempotent_and_final() {
    let mut chart = chart();
    chart.destroy();
    chart.destroy();
    assert!(chart.is_destroyed());
    assert!(matches!(chart.layout(), Err(ChartError::Destroyed)));
    assert!(matches!(chart.set_data(chart_data()), Err(ChartError::Destroyed)));
}

#[test]
fn overlay_bounds_overlap_padding() {
    let chart = chart();
    let r = chart.overlay_bounds();
    assert_eq!((r.left, r.top, r.right, r.bottom), (70.0, 30.0, 930.0, 170.0));
    assert!(r.contains(500.0, 100.0));
}

#[test]
fn tooltip_stays_inside_container() {
    let s = Settings::default();
    // fits to the right of the anchor
    assert_eq!(place_tooltip([100.0, 60.0], (120.0, 40.0), (1000.0, 200.0), &s), (190.0, 80.0));
    // sticks to the top
    assert_eq!(place_tooltip([100.0, 0.0], (120.0, 100.0), (1000.0, 200.0), &s).1, 0.0);
    // sticks to the bottom
    assert_eq!(place_tooltip([100.0, 120.0], (120.0, 100.0), (1000.0, 200.0), &s).1, 100.0);
    // flips to the left of the anchor
    assert_eq!(place_tooltip([840.0, 60.0], (120.0, 40.0), (1000.0, 200.0), &s).0, 790.0);
}
