use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("browser page error: {0}")]
    Page(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("browser close failed: {0}")]
    BrowserClose(String),

    #[error("render input error: {0}")]
    Input(#[from] folio_core::error::CoreError),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
