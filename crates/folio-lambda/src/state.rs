use std::sync::Arc;

use folio_core::models::layout::PdfLayout;
use folio_export::browser::BrowserLauncher;
use folio_storage::store::ArtifactStore;

use crate::config::FunctionConfig;

/// Collaborators shared by every invocation, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: FunctionConfig,
    pub layout: PdfLayout,
    pub launcher: Arc<dyn BrowserLauncher>,
    pub store: Arc<dyn ArtifactStore>,
}

impl AppState {
    pub fn new(
        config: FunctionConfig,
        launcher: Arc<dyn BrowserLauncher>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            config,
            layout: PdfLayout::default(),
            launcher,
            store,
        }
    }
}
