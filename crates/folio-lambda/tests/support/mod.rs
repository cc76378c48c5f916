use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use folio_core::models::artifact::StorageArtifact;
use folio_core::models::layout::PdfLayout;
use folio_export::browser::{BoxFuture, BrowserLauncher, BrowserSession, LaunchSettings};
use folio_export::error::ExportError;
use folio_lambda::config::FunctionConfig;
use folio_lambda::state::AppState;
use folio_storage::error::StorageError;
use folio_storage::store::ArtifactStore;

pub const FAKE_PDF: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

#[derive(Default)]
pub struct BrowserCounts {
    pub launches: AtomicUsize,
    pub prints: AtomicUsize,
    pub closes: AtomicUsize,
    pub last_executable: Mutex<Option<PathBuf>>,
    pub last_html: Mutex<Option<String>>,
}

impl BrowserCounts {
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn prints(&self) -> usize {
        self.prints.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// Launcher whose sessions print a canned PDF, or fail on demand.
pub struct FakeLauncher {
    pub counts: Arc<BrowserCounts>,
    pub fail_print: bool,
}

impl FakeLauncher {
    pub fn working() -> Self {
        Self {
            counts: Arc::default(),
            fail_print: false,
        }
    }

    pub fn failing_print() -> Self {
        Self {
            counts: Arc::default(),
            fail_print: true,
        }
    }
}

impl BrowserLauncher for FakeLauncher {
    fn launch<'a>(
        &'a self,
        settings: &'a LaunchSettings,
    ) -> BoxFuture<'a, Result<Box<dyn BrowserSession>, ExportError>> {
        Box::pin(async move {
            self.counts.launches.fetch_add(1, Ordering::SeqCst);
            *self.counts.last_executable.lock().unwrap() = Some(settings.executable_path.clone());
            Ok(Box::new(FakeSession {
                counts: self.counts.clone(),
                fail_print: self.fail_print,
            }) as Box<dyn BrowserSession>)
        })
    }
}

struct FakeSession {
    counts: Arc<BrowserCounts>,
    fail_print: bool,
}

impl BrowserSession for FakeSession {
    fn print_pdf<'a>(
        &'a mut self,
        html: &'a str,
        _layout: &'a PdfLayout,
    ) -> BoxFuture<'a, Result<Vec<u8>, ExportError>> {
        Box::pin(async move {
            self.counts.prints.fetch_add(1, Ordering::SeqCst);
            *self.counts.last_html.lock().unwrap() = Some(html.to_string());
            if self.fail_print {
                Err(ExportError::Pdf("printing crashed".to_string()))
            } else {
                Ok(FAKE_PDF.to_vec())
            }
        })
    }

    fn close(self: Box<Self>) -> BoxFuture<'static, Result<(), ExportError>> {
        Box::pin(async move {
            self.counts.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

/// In-memory store that records what it was asked to write.
#[derive(Default)]
pub struct FakeStore {
    pub written: Mutex<Vec<StorageArtifact>>,
    pub fail: bool,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            written: Mutex::default(),
            fail: true,
        }
    }

    pub fn writes(&self) -> usize {
        self.written.lock().unwrap().len()
    }
}

impl ArtifactStore for FakeStore {
    fn put_artifact(&self, artifact: StorageArtifact) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(async move {
            if self.fail {
                return Err(StorageError::PutObject {
                    key: artifact.key,
                    message: "AccessDenied".to_string(),
                });
            }
            self.written.lock().unwrap().push(artifact);
            Ok("\"etag\"".to_string())
        })
    }
}

pub fn shipped_template() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates/invoice.html.tera")
}

pub fn test_config() -> FunctionConfig {
    FunctionConfig {
        template_path: shipped_template(),
        chrome_path: "/opt/chromium".into(),
        chrome_local_path: "/usr/bin/chromium".into(),
        ..FunctionConfig::default()
    }
}

pub fn state_with(config: FunctionConfig, launcher: Arc<FakeLauncher>, store: Arc<FakeStore>) -> AppState {
    AppState::new(config, launcher, store)
}
