//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency.

pub const PDF_PREFIX: &str = "public/pdfs";

pub const PDF_FILENAME: &str = "invoice.pdf";

/// Key for a generated PDF. Every invocation writes the same key for a given
/// filename, so later writes replace earlier ones.
pub fn pdf(prefix: &str, filename: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{prefix}/{filename}")
    }
}
