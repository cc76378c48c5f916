use std::future::Future;
use std::pin::Pin;

use aws_sdk_s3::Client;

use folio_core::models::artifact::StorageArtifact;

use crate::error::StorageError;
use crate::objects;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Destination for rendered documents.
pub trait ArtifactStore: Send + Sync {
    /// Write the artifact. Resolves to the stored object's ETag.
    fn put_artifact(&self, artifact: StorageArtifact) -> BoxFuture<'_, Result<String, StorageError>>;
}

/// [`ArtifactStore`] backed by a real S3 bucket.
#[derive(Clone)]
pub struct S3ArtifactStore {
    client: Client,
}

impl S3ArtifactStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ArtifactStore for S3ArtifactStore {
    fn put_artifact(&self, artifact: StorageArtifact) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(async move {
            let StorageArtifact {
                bucket,
                key,
                content_type,
                encryption,
                body,
            } = artifact;
            let size = body.len();

            let etag = objects::put_object(
                &self.client,
                &bucket,
                &key,
                body,
                Some(&content_type),
                encryption,
            )
            .await?;

            tracing::info!(%bucket, %key, size, %etag, "artifact stored");
            Ok(etag)
        })
    }
}
