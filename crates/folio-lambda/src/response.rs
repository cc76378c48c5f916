use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use folio_core::models::artifact::PDF_CONTENT_TYPE;

/// API Gateway proxy response carrying a binary body.
///
/// Field names follow the Lambda proxy integration output format
/// (`statusCode`, `headers`, `body`, `isBase64Encoded`); API Gateway decodes
/// the body back to bytes when the route has binary media types enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl PdfResponse {
    /// 200 with the PDF as a downloadable attachment.
    pub fn attachment(pdf: &[u8], filename: &str) -> Self {
        let headers = BTreeMap::from([
            ("Content-type".to_string(), PDF_CONTENT_TYPE.to_string()),
            (
                "content-disposition".to_string(),
                format!("attachment; filename={filename}"),
            ),
        ]);

        Self {
            status_code: 200,
            headers,
            body: STANDARD.encode(pdf),
            is_base64_encoded: true,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn decode_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.body)
    }
}
