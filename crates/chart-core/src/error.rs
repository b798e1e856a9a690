// File: crates/chart-core/src/error.rs
// Summary: Error type for chart building, mounting and raster output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot build a chart from an empty dataset")]
    EmptyDataset,
    #[error("host document has no element with id `{0}`")]
    MissingMountPoint(String),
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
