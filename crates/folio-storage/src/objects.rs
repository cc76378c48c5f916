use aws_sdk_s3::Client;
use aws_sdk_s3::types::ServerSideEncryption;
use aws_smithy_types::byte_stream::ByteStream;

use folio_core::models::artifact::Encryption;

use crate::error::StorageError;

/// Map the domain encryption mode onto the SDK's header value.
pub fn server_side_encryption(encryption: Encryption) -> Option<ServerSideEncryption> {
    match encryption {
        Encryption::None => None,
        Encryption::Aes256 => Some(ServerSideEncryption::Aes256),
    }
}

/// Put an object to S3, optionally asking for server-side encryption.
/// Returns the new ETag.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
    encryption: Encryption,
) -> Result<String, StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    if let Some(sse) = server_side_encryption(encryption) {
        req = req.server_side_encryption(sse);
    }

    let resp = req.send().await.map_err(|e| StorageError::PutObject {
        key: key.to_string(),
        message: e.into_service_error().to_string(),
    })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}
