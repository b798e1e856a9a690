// File: crates/pdf-export/src/error.rs
// Summary: Failure modes of the export steps.

use std::path::PathBuf;

use chromiumoxide::error::CdpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("source page {} not found", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("source page {} is not a local file", .0.display())]
    InvalidSource(PathBuf),
    #[error("invalid browser configuration: {0}")]
    Launch(String),
    #[error("browser error: {0}")]
    Browser(#[from] CdpError),
    #[error("browser returned an empty PDF")]
    EmptyPdf,
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
