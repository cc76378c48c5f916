//! folio-core
//!
//! Pure domain types and object key conventions.
//! No AWS SDK or browser dependency — this is the shared vocabulary of folio.

pub mod error;
pub mod models;
pub mod s3_keys;
