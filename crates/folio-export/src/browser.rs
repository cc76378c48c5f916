use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use folio_core::models::layout::PdfLayout;

use crate::error::ExportError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Flags the serverless Chromium build needs to start inside a sandboxed
/// function environment.
pub const DEFAULT_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-gpu",
    "--single-process",
    "--no-zygote",
    "--disable-dev-shm-usage",
    "--hide-scrollbars",
];

pub const DEFAULT_VIEWPORT: (u32, u32) = (800, 600);

/// How to start one browser process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub executable_path: PathBuf,
    pub args: Vec<String>,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl LaunchSettings {
    /// Headless launch of `executable_path` with the default flags and viewport.
    pub fn headless(executable_path: impl Into<PathBuf>) -> Self {
        Self {
            executable_path: executable_path.into(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
        }
    }
}

/// Starts browser processes. One launch per invocation.
pub trait BrowserLauncher: Send + Sync {
    fn launch<'a>(
        &'a self,
        settings: &'a LaunchSettings,
    ) -> BoxFuture<'a, Result<Box<dyn BrowserSession>, ExportError>>;
}

/// A running browser process.
///
/// `close` consumes the session so it can only be released once. Callers
/// must reach `close` on every path after a successful launch; see
/// [`finish_session`].
pub trait BrowserSession: Send {
    /// Inject `html` into a fresh page and print it.
    fn print_pdf<'a>(
        &'a mut self,
        html: &'a str,
        layout: &'a PdfLayout,
    ) -> BoxFuture<'a, Result<Vec<u8>, ExportError>>;

    fn close(self: Box<Self>) -> BoxFuture<'static, Result<(), ExportError>>;
}

/// Join the result of work done inside a session with the result of closing it.
///
/// The work's own error wins over a close error; a close error after
/// successful work fails the whole operation.
pub fn finish_session<T, E>(
    outcome: Result<T, E>,
    closed: Result<(), ExportError>,
) -> Result<T, E>
where
    E: From<ExportError> + std::fmt::Display,
{
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            tracing::warn!(error = %e, close_error = %close_err, "browser close failed after an earlier error");
            Err(e)
        }
    }
}
