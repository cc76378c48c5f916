use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::error::InvocationError;
use crate::event::PdfEvent;
use crate::pipeline::run_invocation;
use crate::response::PdfResponse;
use crate::state::AppState;

/// Lambda entry point for one event. Every failure, including an event that
/// does not parse, is logged before it is handed to the runtime.
pub async fn handle_request(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<PdfResponse, Error> {
    let request_id = event.context.request_id.clone();

    invoke(state, &request_id, event.payload).await.map_err(|e| {
        tracing::error!(%request_id, error = %e, "invocation failed");
        Error::from(e)
    })
}

async fn invoke(
    state: &AppState,
    request_id: &str,
    payload: Value,
) -> Result<PdfResponse, InvocationError> {
    let event = PdfEvent::from_payload(payload)?;
    tracing::info!(%request_id, is_offline = event.is_offline, "pdf requested");
    run_invocation(state, &event).await
}
