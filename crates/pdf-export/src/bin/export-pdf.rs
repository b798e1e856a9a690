// File: crates/pdf-export/src/bin/export-pdf.rs
// Summary: CLI: export-pdf [SOURCE.html] [OUTPUT.pdf]

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_pdf_export::{export_pdf, PdfOptions};

const DEFAULT_SOURCE: &str = "index.html";
const DEFAULT_OUTPUT: &str = "sample.pdf";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let source = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let opts = PdfOptions::from_env();
    let report = export_pdf(&source, &output, &opts)
        .await
        .with_context(|| format!("exporting {} to {}", source.display(), output.display()))?;
    println!("{} ({} bytes)", report.output.display(), report.bytes);
    Ok(())
}
