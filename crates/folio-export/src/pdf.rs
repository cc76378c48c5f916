use folio_core::models::layout::PdfLayout;

use crate::browser::BrowserSession;
use crate::error::ExportError;

/// Every PDF file starts with these bytes.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Print rendered HTML to PDF bytes using an open browser session.
///
/// The session is borrowed, not consumed: closing it stays with whoever
/// launched it.
pub async fn rasterize(
    session: &mut dyn BrowserSession,
    html: &str,
    layout: &PdfLayout,
) -> Result<Vec<u8>, ExportError> {
    let bytes = session.print_pdf(html, layout).await?;
    ensure_pdf_signature(&bytes)?;
    tracing::info!(bytes = bytes.len(), "pdf rasterized");
    Ok(bytes)
}

pub fn ensure_pdf_signature(bytes: &[u8]) -> Result<(), ExportError> {
    if bytes.starts_with(PDF_SIGNATURE) {
        Ok(())
    } else if bytes.is_empty() {
        Err(ExportError::Pdf("browser returned an empty document".to_string()))
    } else {
        Err(ExportError::Pdf(
            "browser output does not start with a PDF signature".to_string(),
        ))
    }
}
