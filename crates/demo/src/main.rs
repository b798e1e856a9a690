// File: crates/demo/src/main.rs
// Summary: Demo renders the yearly threshold chart to index.html, chart.svg and chart.png.

mod dataset;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_chart::{theme, Chart, HostDocument, RenderOptions, MOUNT_ID};

const THRESHOLD: f64 = 70.0;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // [DATA.csv] [OUT_DIR]; "-" keeps the built-in sample.
    let mut args = std::env::args_os().skip(1);
    let data = args.next().map(PathBuf::from).filter(|p| p.as_os_str() != "-");
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let records = match &data {
        Some(path) => dataset::from_path(path)?,
        None => dataset::sample(),
    };
    tracing::info!(records = records.len(), source = ?data, "dataset loaded");

    let theme = std::env::var("CHART_THEME")
        .map(|name| theme::find(&name))
        .unwrap_or_default();
    let opts = RenderOptions { theme, ..RenderOptions::default() };

    let chart = Chart::from_records(&records, THRESHOLD, opts).context("building chart")?;

    let mut page = HostDocument::new("Yearly totals against threshold");
    page.mount(MOUNT_ID, &chart.to_svg())?;
    page.write_to(out_dir.join("index.html"))?;
    chart.render_to_svg(out_dir.join("chart.svg"))?;
    chart.render_to_png(out_dir.join("chart.png"))?;

    println!("Wrote {}", out_dir.join("index.html").display());
    Ok(())
}
