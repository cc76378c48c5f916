use std::path::{Path, PathBuf};

use folio_core::s3_keys;

pub const DEFAULT_BUCKET: &str = "pdf-puppeteer";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/invoice.html.tera";
pub const DEFAULT_RESPONSE_FILENAME: &str = "test.pdf";
/// Where the Chromium layer unpacks inside the function sandbox.
pub const DEFAULT_CHROME_PATH: &str = "/opt/chromium";
/// Absolute: the launcher resolves the path as given, not through `PATH`.
pub const DEFAULT_CHROME_LOCAL_PATH: &str = "/usr/bin/chromium";

/// Function settings, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub bucket: String,
    pub region: String,
    pub template_path: PathBuf,
    pub key_prefix: String,
    /// Name of the stored object. Fixed, so every invocation overwrites it.
    pub output_filename: String,
    /// Name offered to the client in `content-disposition`.
    pub response_filename: String,
    pub chrome_path: PathBuf,
    pub chrome_local_path: PathBuf,
}

impl FunctionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Self {
            bucket: var("FOLIO_BUCKET", DEFAULT_BUCKET),
            region: var("AWS_REGION", DEFAULT_REGION),
            template_path: var("FOLIO_TEMPLATE_PATH", DEFAULT_TEMPLATE_PATH).into(),
            key_prefix: var("FOLIO_KEY_PREFIX", s3_keys::PDF_PREFIX),
            output_filename: var("FOLIO_OUTPUT_FILENAME", s3_keys::PDF_FILENAME),
            response_filename: var("FOLIO_RESPONSE_FILENAME", DEFAULT_RESPONSE_FILENAME),
            chrome_path: var("CHROME_PATH", DEFAULT_CHROME_PATH).into(),
            chrome_local_path: var("CHROME_LOCAL_PATH", DEFAULT_CHROME_LOCAL_PATH).into(),
        }
    }

    /// Browser binary for this invocation: the developer's local install when
    /// running offline, the bundled one otherwise.
    pub fn executable_path(&self, is_offline: bool) -> &Path {
        if is_offline {
            &self.chrome_local_path
        } else {
            &self.chrome_path
        }
    }

    pub fn object_key(&self) -> String {
        s3_keys::pdf(&self.key_prefix, &self.output_filename)
    }
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
