//! folio-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the
//! [`store::ArtifactStore`] seam the function writes through.

pub mod client;
pub mod error;
pub mod objects;
pub mod store;
