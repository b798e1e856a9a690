// File: crates/pdf-export/src/lib.rs
// Summary: Library entry point; snapshot a local HTML page to PDF through headless Chromium.

pub mod error;
pub mod export;
pub mod options;
pub mod session;

pub use error::ExportError;
pub use export::{export_pdf, resolve_source, ExportReport};
pub use options::PdfOptions;
pub use session::BrowserSession;
