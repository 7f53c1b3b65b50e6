// File: crates/demo/src/main.rs
// Summary: Demo loads a label/series CSV table, lays it out as a line chart and renders it to PNG.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use nanochart_core::types::{HEIGHT, WIDTH};
use nanochart_core::{Chart, ChartData, Series, Settings};
use nanochart_render_skia::{theme, RenderOptions, SkiaRender};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nanochart-demo")]
#[command(about = "Render a CSV table (first column labels, remaining columns series) as a line chart PNG")]
struct Cli {
    /// Input CSV with a header row
    input: PathBuf,
    /// JSON file overriding chart settings (camelCase keys)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Output PNG path; defaults to target/out/chart_<stem>.png
    #[arg(long)]
    out: Option<PathBuf>,
    /// Theme preset: light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,
    #[arg(long, default_value_t = WIDTH)]
    width: u32,
    #[arg(long, default_value_t = HEIGHT)]
    height: u32,
    /// Draw the tooltip for the pointer at this horizontal offset
    #[arg(long)]
    hover_x: Option<f64>,
    #[arg(long)]
    no_legend: bool,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false)
        .init();

    let settings = match &cli.settings {
        Some(path) => Settings::from_path(path).with_context(|| format!("failed to load settings '{}'", path.display()))?,
        None => Settings::default(),
    };

    let file = std::fs::File::open(&cli.input).with_context(|| format!("opening {}", cli.input.display()))?;
    let data = load_table(file).with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!("Loaded {} labels x {} series from {}", data.labels.len(), data.series.len(), cli.input.display());

    let mut chart = Chart::new(settings, f64::from(cli.width), f64::from(cli.height))?;
    chart.set_data(data)?;

    let ranges = chart.ranges()?;
    info!("Value range: [{}, {}]", ranges.y_values.min, ranges.y_values.max);

    let hover = match cli.hover_x {
        Some(x) => {
            chart.pointer_enter();
            chart.hover_at(x)?
        }
        None => None,
    };
    if let Some(h) = &hover {
        info!("Tooltip for '{}' (index {})", h.label, h.index);
    }

    let opts = RenderOptions {
        theme: theme::find(&cli.theme),
        show_legend: !cli.no_legend,
        hover,
        ..RenderOptions::default()
    };
    if opts.theme.name != cli.theme.to_lowercase() {
        warn!("unknown theme '{}', using {}", cli.theme, opts.theme.name);
    }

    let out = cli.out.clone().unwrap_or_else(|| out_name(&cli.input));
    chart.render_to_png(&opts, &out)?;
    info!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("chart.png");
    } else {
        out.push(format!("chart_{stem}.png"));
    }
    out
}

/// First column holds labels, every further column is one series keyed by its header.
fn load_table(reader: impl Read) -> Result<ChartData> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        bail!("expected a label column and at least one series column, found {} column(s)", headers.len());
    }

    let mut labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        labels.push(rec.get(0).unwrap_or_default().to_string());
        for (col, samples) in columns.iter_mut().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("row {}, column '{}': not a number: '{cell}'", row + 1, &headers[col + 1]))?;
            samples.push(value);
        }
    }

    let series = headers.iter().skip(1).zip(columns).map(|(key, samples)| Series::new(key, samples)).collect();
    let data = ChartData { labels, series };
    data.validate()?;
    Ok(data)
}
