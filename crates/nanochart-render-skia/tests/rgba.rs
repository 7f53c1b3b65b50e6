// File: crates/nanochart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use nanochart_core::{Chart, ChartData, Series, Settings};
use nanochart_render_skia::{RenderOptions, SkiaRender, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new(Settings::default(), 320.0, 160.0).unwrap();
    chart
        .set_data(ChartData::new(vec!["a".into(), "b".into()]).with_series(Series::new("s", vec![0.0, 4.0])))
        .unwrap();

    let opts = RenderOptions { draw_labels: false, show_legend: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 160));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is plain background (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background_reaches_corners() {
    let mut chart = Chart::new(Settings::default(), 200.0, 100.0).unwrap();
    chart
        .set_data(ChartData::new(vec!["a".into(), "b".into()]).with_series(Series::new("s", vec![1.0, 2.0])))
        .unwrap();
    let opts = RenderOptions { theme: Theme::dark(), draw_labels: false, show_legend: false, hover: None, ..RenderOptions::default() };
    let (px, _, _, _) = chart.render_to_rgba8(&opts).unwrap();
    let last = px.len() - 4;
    assert_eq!(&px[last..], &[18, 18, 20, 255]);
}
