// File: crates/pdf-export/src/options.rs
// Summary: Page and browser settings for a PDF export.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;

/// A4 paper in inches.
pub const A4_WIDTH_IN: f64 = 8.27;
pub const A4_HEIGHT_IN: f64 = 11.7;

#[derive(Clone, Debug, PartialEq)]
pub struct PdfOptions {
    /// Portrait paper size; `landscape` rotates it.
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub landscape: bool,
    /// Applied to all four sides; Chromium's own default is 0.4in.
    pub margin_in: f64,
    pub scale: f64,
    pub print_background: bool,
    /// Browser binary; discovered automatically when `None`.
    pub chrome_executable: Option<PathBuf>,
    pub launch_timeout: Duration,
    /// How long to wait for the browser to exit before killing it.
    pub close_timeout: Duration,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            paper_width_in: A4_WIDTH_IN,
            paper_height_in: A4_HEIGHT_IN,
            landscape: true,
            margin_in: 0.0,
            scale: 0.69,
            print_background: true,
            chrome_executable: None,
            launch_timeout: Duration::from_secs(20),
            close_timeout: Duration::from_secs(5),
        }
    }
}

impl PdfOptions {
    /// Defaults, with `CHROME_PATH` selecting the browser binary when set.
    pub fn from_env() -> Self {
        let chrome_executable = std::env::var_os("CHROME_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { chrome_executable, ..Self::default() }
    }

    /// CDP `Page.printToPDF` parameters for these options.
    pub fn print_params(&self) -> PrintToPdfParams {
        PrintToPdfParams {
            landscape: Some(self.landscape),
            print_background: Some(self.print_background),
            scale: Some(self.scale),
            paper_width: Some(self.paper_width_in),
            paper_height: Some(self.paper_height_in),
            margin_top: Some(self.margin_in),
            margin_bottom: Some(self.margin_in),
            margin_left: Some(self.margin_in),
            margin_right: Some(self.margin_in),
            ..Default::default()
        }
    }
}
