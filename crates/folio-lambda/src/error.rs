use thiserror::Error;

use folio_core::error::CoreError;
use folio_export::error::ExportError;
use folio_storage::error::StorageError;

/// Everything that can fail an invocation. Each variant is fatal.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("invalid event: {0}")]
    Event(#[from] serde_json::Error),

    #[error("invalid render input: {0}")]
    Input(#[from] CoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to store PDF: {0}")]
    Storage(#[from] StorageError),
}
