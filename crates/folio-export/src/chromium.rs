//! Headless Chromium driven over the DevTools protocol.

use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::{Browser, BrowserConfig};
use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;

use folio_core::models::layout::{PdfLayout, mm_to_inches};

use crate::browser::{BoxFuture, BrowserLauncher, BrowserSession, LaunchSettings};
use crate::error::ExportError;

const BLANK_PAGE: &str = "about:blank";

/// How long a closed browser gets to exit before it is killed.
pub const EXIT_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromiumLauncher;

impl BrowserLauncher for ChromiumLauncher {
    fn launch<'a>(
        &'a self,
        settings: &'a LaunchSettings,
    ) -> BoxFuture<'a, Result<Box<dyn BrowserSession>, ExportError>> {
        Box::pin(async move {
            let config = BrowserConfig::builder()
                .chrome_executable(&settings.executable_path)
                .args(settings.args.iter().cloned())
                .viewport(Viewport {
                    width: settings.viewport_width,
                    height: settings.viewport_height,
                    ..Default::default()
                })
                .build()
                .map_err(ExportError::BrowserLaunch)?;

            let (browser, handler) = Browser::launch(config)
                .await
                .map_err(|e| ExportError::BrowserLaunch(e.to_string()))?;

            // The CDP connection only makes progress while the handler is polled.
            let handler = tokio::spawn(async move {
                let errors = drain_events(handler).await;
                tracing::debug!(errors, "browser handler finished");
            });

            tracing::info!(executable = %settings.executable_path.display(), "browser launched");
            Ok(Box::new(ChromiumSession { browser, handler }) as Box<dyn BrowserSession>)
        })
    }
}

/// Poll the CDP event stream until the connection ends. Returns how many
/// events failed.
///
/// A failed event is usually a message this protocol version cannot decode;
/// the connection stays usable, so polling continues.
pub async fn drain_events<S, E>(events: S) -> usize
where
    S: Stream<Item = Result<(), E>>,
    E: std::fmt::Display,
{
    let mut events = std::pin::pin!(events);
    let mut errors = 0;
    while let Some(event) = events.next().await {
        if let Err(e) = event {
            errors += 1;
            tracing::debug!(error = %e, "ignoring browser event error");
        }
    }
    errors
}

/// The teardown operations of a running browser process.
pub trait BrowserProcess: Send {
    /// Ask the browser to shut itself down.
    fn request_close(&mut self) -> BoxFuture<'_, Result<(), ExportError>>;

    fn kill(&mut self) -> BoxFuture<'_, Result<(), ExportError>>;

    /// Resolve once the process has exited.
    fn wait_exit(&mut self) -> BoxFuture<'_, Result<(), ExportError>>;
}

impl BrowserProcess for Browser {
    fn request_close(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            self.close()
                .await
                .map(|_| ())
                .map_err(|e| ExportError::BrowserClose(e.to_string()))
        })
    }

    fn kill(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            match Browser::kill(self).await {
                Some(Err(e)) => Err(ExportError::BrowserClose(e.to_string())),
                Some(Ok(())) | None => Ok(()),
            }
        })
    }

    fn wait_exit(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            self.wait()
                .await
                .map(|_| ())
                .map_err(|e| ExportError::BrowserClose(e.to_string()))
        })
    }
}

/// Terminate a browser process on every path.
///
/// A graceful close is tried first. If it fails, or the process has not
/// exited within `grace`, the process is killed and reaped. The result is
/// that of the graceful close.
pub async fn shut_down(
    process: &mut dyn BrowserProcess,
    grace: Duration,
) -> Result<(), ExportError> {
    let closed = process.request_close().await;

    let exited = match &closed {
        Ok(()) => matches!(
            tokio::time::timeout(grace, process.wait_exit()).await,
            Ok(Ok(()))
        ),
        Err(e) => {
            tracing::warn!(error = %e, "graceful browser close failed, killing");
            false
        }
    };

    if !exited {
        if let Err(e) = process.kill().await {
            tracing::warn!(error = %e, "killing browser failed");
        }
        if let Err(e) = process.wait_exit().await {
            tracing::warn!(error = %e, "waiting for browser exit failed");
        }
    }

    closed
}

pub struct ChromiumSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession for ChromiumSession {
    fn print_pdf<'a>(
        &'a mut self,
        html: &'a str,
        layout: &'a PdfLayout,
    ) -> BoxFuture<'a, Result<Vec<u8>, ExportError>> {
        Box::pin(async move {
            let page = self
                .browser
                .new_page(BLANK_PAGE)
                .await
                .map_err(|e| ExportError::Page(e.to_string()))?;

            page.set_content(html)
                .await
                .map_err(|e| ExportError::Page(e.to_string()))?;

            page.pdf(print_params(layout))
                .await
                .map_err(|e| ExportError::Pdf(e.to_string()))
        })
    }

    fn close(mut self: Box<Self>) -> BoxFuture<'static, Result<(), ExportError>> {
        Box::pin(async move {
            let closed = shut_down(&mut self.browser, EXIT_GRACE).await;

            let joined = tokio::time::timeout(EXIT_GRACE, &mut self.handler).await;
            match joined {
                Ok(Err(e)) => tracing::debug!(error = %e, "browser handler task did not finish cleanly"),
                Err(_) => self.handler.abort(),
                Ok(Ok(())) => {}
            }

            tracing::info!("browser closed");
            closed
        })
    }
}

impl Drop for ChromiumSession {
    // `Browser` kills its child process on drop; the handler task goes with it.
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// DevTools print parameters for a layout. Dimensions are in inches.
pub fn print_params(layout: &PdfLayout) -> PrintToPdfParams {
    let (width, height) = layout.paper.dimensions_in();
    let margins = layout.margins;

    PrintToPdfParams {
        print_background: Some(layout.print_background),
        paper_width: Some(width),
        paper_height: Some(height),
        margin_top: Some(mm_to_inches(margins.top_mm)),
        margin_right: Some(mm_to_inches(margins.right_mm)),
        margin_bottom: Some(mm_to_inches(margins.bottom_mm)),
        margin_left: Some(mm_to_inches(margins.left_mm)),
        ..Default::default()
    }
}
