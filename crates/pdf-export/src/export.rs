// File: crates/pdf-export/src/export.rs
// Summary: Load a local page in headless Chromium and print it to a PDF file.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{ExportError, Result};
use crate::options::PdfOptions;
use crate::session::BrowserSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    pub source: Url,
    pub output: PathBuf,
    pub bytes: usize,
}

/// `file://` URL of an existing local file.
pub async fn resolve_source(path: &Path) -> Result<Url> {
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|source| ExportError::SourceNotFound { path: path.to_path_buf(), source })?;
    let meta = tokio::fs::metadata(&canonical)
        .await
        .map_err(|source| ExportError::SourceNotFound { path: path.to_path_buf(), source })?;
    if !meta.is_file() {
        return Err(ExportError::InvalidSource(path.to_path_buf()));
    }
    Url::from_file_path(&canonical).map_err(|_| ExportError::InvalidSource(path.to_path_buf()))
}

async fn print_page(session: &BrowserSession, url: &Url, opts: &PdfOptions) -> Result<Vec<u8>> {
    let page = session.new_page().await?;
    page.goto(url.as_str()).await?;
    tracing::info!(url = %url, "page loaded");
    let bytes = page.pdf(opts.print_params()).await?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyPdf);
    }
    Ok(bytes)
}

async fn write_output(output: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| ExportError::Write { path: output.to_path_buf(), source };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    tokio::fs::write(output, bytes).await.map_err(write_err)
}

/// Snapshot `source` to `output`.
///
/// The source is resolved before the browser starts, so a missing page fails
/// without launching anything. The output is only written once a non-empty PDF
/// has been produced, and the browser is closed whether or not printing worked.
pub async fn export_pdf(source: &Path, output: &Path, opts: &PdfOptions) -> Result<ExportReport> {
    let url = resolve_source(source).await?;
    tracing::info!(url = %url, "source resolved");
    let session = BrowserSession::launch(opts).await?;

    let printed = match print_page(&session, &url, opts).await {
        Ok(bytes) => write_output(output, &bytes).await.map(|()| bytes.len()),
        Err(e) => Err(e),
    };
    let closed = session.close().await;

    let bytes = match (printed, closed) {
        (Ok(n), Ok(())) => n,
        (Ok(_), Err(e)) => return Err(e),
        (Err(e), closed) => {
            if let Err(close_err) = closed {
                tracing::warn!(error = %close_err, "closing browser after failed export");
            }
            return Err(e);
        }
    };

    tracing::info!(source = %url, output = %output.display(), bytes, "pdf written");
    Ok(ExportReport { source: url, output: output.to_path_buf(), bytes })
}
