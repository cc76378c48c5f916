use serde::{Deserialize, Serialize};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encryption {
    None,
    Aes256,
}

/// One object to be written to the bucket. Written once, never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageArtifact {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub encryption: Encryption,
    pub body: Vec<u8>,
}

impl StorageArtifact {
    /// A PDF encrypted at rest with AES-256.
    pub fn pdf(bucket: impl Into<String>, key: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            encryption: Encryption::Aes256,
            body,
        }
    }
}
