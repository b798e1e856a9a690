// File: crates/pdf-export/src/session.rs
// Summary: Headless browser session with its CDP handler task.
// Notes:
// - `close` shuts the browser down and joins the handler; dropping an unclosed
//   session aborts the handler and the browser child is killed on drop.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::error::{ExportError, Result};
use crate::options::PdfOptions;

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    close_timeout: Duration,
    closed: bool,
}

impl BrowserSession {
    /// Launch headless Chromium without the setuid sandbox.
    pub async fn launch(opts: &PdfOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .launch_timeout(opts.launch_timeout);
        if let Some(exe) = &opts.chrome_executable {
            builder = builder.chrome_executable(exe);
        }
        let config = builder.build().map_err(ExportError::Launch)?;

        let (browser, mut handler) = Browser::launch(config).await?;
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!(error = %e, "cdp handler event");
                }
            }
        });
        tracing::info!("browser launched");
        Ok(Self { browser, handler, close_timeout: opts.close_timeout, closed: false })
    }

    pub async fn new_page(&self) -> Result<Page> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    /// Close the browser, wait for the process and join the handler task.
    ///
    /// A failed close request, or a process still running after
    /// `close_timeout`, falls back to killing the child.
    pub async fn close(mut self) -> Result<()> {
        self.closed = true;
        let closed = self.browser.close().await;
        if let Err(e) = &closed {
            tracing::warn!(error = %e, "browser close request failed, killing process");
            self.kill().await;
        }
        let exited = tokio::time::timeout(self.close_timeout, self.browser.wait()).await;
        match exited {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "waiting for browser exit"),
            Err(_) => {
                tracing::warn!(timeout = ?self.close_timeout, "browser did not exit, killing process");
                self.kill().await;
            }
        }
        self.handler.abort();
        let _ = (&mut self.handler).await;
        tracing::info!("browser closed");
        closed.map(|_| ()).map_err(ExportError::from)
    }

    async fn kill(&mut self) {
        if let Some(Err(e)) = self.browser.kill().await {
            tracing::warn!(error = %e, "killing browser process");
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if !self.closed {
            self.handler.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "needs a local Chromium"]
    async fn close_returns_when_handler_is_gone() {
        let opts = PdfOptions { close_timeout: Duration::from_secs(2), ..PdfOptions::from_env() };
        let session = BrowserSession::launch(&opts).await.expect("browser launches");
        // Without the handler the close request cannot be delivered.
        session.handler.abort();
        let closed = tokio::time::timeout(Duration::from_secs(30), session.close()).await;
        assert!(closed.is_ok(), "close must not hang when the CDP channel is gone");
    }
}
