use serde::Deserialize;
use serde_json::Value;

use folio_core::models::render_input::RenderInput;

use crate::error::InvocationError;

/// Incoming invocation payload. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfEvent {
    /// Set by local emulators; selects the local browser binary.
    #[serde(default)]
    pub is_offline: bool,
    /// Template fields. The sample record is used when absent.
    #[serde(default)]
    pub data: Option<Value>,
}

impl PdfEvent {
    pub fn from_payload(payload: Value) -> Result<Self, InvocationError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn render_input(&self) -> Result<RenderInput, InvocationError> {
        match &self.data {
            None | Some(Value::Null) => Ok(RenderInput::sample()),
            Some(data) => Ok(RenderInput::from_value(data.clone())?),
        }
    }
}
