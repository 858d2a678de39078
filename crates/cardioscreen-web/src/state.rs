use std::sync::Arc;

use cardioscreen_model::LinearModel;
use cardioscreen_render::view::ModelPanel;

/// Shared application state. The model is loaded once at startup and is
/// immutable afterwards, so concurrent read-only access is safe.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<LinearModel>,
}

impl AppState {
    pub fn new(model: LinearModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    /// The reference metrics panel shown beside the form.
    pub fn model_panel(&self) -> ModelPanel {
        let metrics = self.model.metrics();
        ModelPanel {
            model_version: self.model.version().to_string(),
            recall_text: format!("{:.0}%", metrics.recall * 100.0),
            precision_text: format!("{:.0}%", metrics.precision * 100.0),
            auc_text: format!("{:.2}", metrics.auc),
        }
    }
}
