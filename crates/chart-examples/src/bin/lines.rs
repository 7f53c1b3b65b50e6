// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that renders the two-series reference chart (plain and hovered) to PNG.

use anyhow::Result;
use nanochart_core::{Chart, ChartData, Rgba, Series, Settings};
use nanochart_render_skia::{RenderOptions, SkiaRender};

fn main() -> Result<()> {
    env_logger::init();

    let data = ChartData::new(vec!["January".into(), "February".into(), "March".into()])
        .with_series(Series::new("Metric A", vec![0.0, 5.0, 10.0]))
        .with_series(
            Series::new("Metric B", vec![-10.0, 5.0, 20.0])
                .with_stroke(Rgba::rgb(0x40, 0xa0, 0xff))
                .with_fill(Rgba::rgba(0x40, 0xa0, 0xff, 0x30)),
        );

    let mut chart = Chart::new(Settings::default(), 1000.0, 200.0)?;
    chart.set_data(data)?;

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    chart.render_to_png(&RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());

    // Pointer over the right half: "February" gets highlighted
    chart.pointer_enter();
    let hover = chart.hover_at(600.0)?;
    if let Some(h) = &hover {
        println!("{}", h.markup);
    }
    let opts = RenderOptions { hover, ..RenderOptions::default() };
    let out = std::path::PathBuf::from("target/out/example_lines_hover.png");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
