use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 PutObject error for {key}: {message}")]
    PutObject { key: String, message: String },
}
