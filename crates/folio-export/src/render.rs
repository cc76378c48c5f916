use std::io::ErrorKind;
use std::path::Path;

use tera::{Context, Tera};

use folio_core::models::render_input::RenderInput;

use crate::error::ExportError;

const TEMPLATE_SUFFIX: &str = ".tera";

/// Render a Tera template with a [`RenderInput`].
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The input fields become the template context variables. Names ending in
/// `.html` get HTML auto-escaping.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    input: &RenderInput,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_value(input.to_value()?)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Load a template shipped with the deployment and render it.
///
/// `invoice.html.tera` is registered as `invoice.html`, so the extension
/// before `.tera` decides escaping.
pub fn render_template_file(path: &Path, input: &RenderInput) -> Result<String, ExportError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExportError::TemplateNotFound(path.display().to_string()),
        _ => ExportError::TemplateRead {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("template");
    let template_name = file_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(file_name);

    let html = render_template(template_name, &content, input)?;
    tracing::debug!(template = %path.display(), bytes = html.len(), "template rendered");
    Ok(html)
}
