//! HTML page assembly via Tera.

use tera::{Context, Tera};
use tracing::debug;

use crate::error::RenderError;
use crate::view::{ModelPanel, ResultView};

const FORM_TEMPLATE: &str = include_str!("../templates/form.html.tera");
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html.tera");

fn render(name: &str, template: &str, context: &Context) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
    let rendered = tera.render(name, context)?;
    debug!(template = name, bytes = rendered.len(), "page rendered");
    Ok(rendered)
}

/// The input form, with the reference model panel and an optional
/// user-correctable error from the previous submission.
pub fn render_form_page(panel: &ModelPanel, error: Option<&str>) -> Result<String, RenderError> {
    let mut context = Context::new();
    context.insert("model", panel);
    context.insert("error", &error);
    render("form", FORM_TEMPLATE, &context)
}

/// The screening outcome: risk banner, guidance, and the contribution chart
/// (or its degraded-mode warning).
pub fn render_result_page(view: &ResultView) -> Result<String, RenderError> {
    let value = serde_json::to_value(view)?;
    let context = Context::from_value(value)
        .map_err(|e| RenderError::TemplateRender(e.to_string()))?;
    render("result", RESULT_TEMPLATE, &context)
}
