use folio_core::models::artifact::StorageArtifact;
use folio_export::browser::{BrowserSession, LaunchSettings, finish_session};
use folio_export::pdf::rasterize;
use folio_export::render::render_template_file;

use crate::error::InvocationError;
use crate::event::PdfEvent;
use crate::response::PdfResponse;
use crate::state::AppState;

/// Run one invocation end to end.
///
/// The template is rendered before any browser starts, so a broken template
/// never launches one. Once launched, the browser is closed exactly once
/// whatever happens while printing or storing.
pub async fn run_invocation(
    state: &AppState,
    event: &PdfEvent,
) -> Result<PdfResponse, InvocationError> {
    let input = event.render_input()?;
    let html = render_template_file(&state.config.template_path, &input)?;

    let settings = LaunchSettings::headless(state.config.executable_path(event.is_offline));
    let mut session = state.launcher.launch(&settings).await?;

    let outcome = print_and_store(state, session.as_mut(), &html).await;
    let closed = session.close().await;

    finish_session(outcome, closed)
}

async fn print_and_store(
    state: &AppState,
    session: &mut dyn BrowserSession,
    html: &str,
) -> Result<PdfResponse, InvocationError> {
    let pdf = rasterize(session, html, &state.layout).await?;
    let response = PdfResponse::attachment(&pdf, &state.config.response_filename);

    let artifact = StorageArtifact::pdf(&state.config.bucket, state.config.object_key(), pdf);
    let key = artifact.key.clone();
    let etag = state.store.put_artifact(artifact).await.inspect_err(|e| {
        tracing::error!(error = %e, %key, "pdf upload failed");
    })?;

    tracing::info!(%key, %etag, "pdf published");
    Ok(response)
}
