use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Serialize;
use tracing::{error, info_span};
use uuid::Uuid;

use cardioscreen_core::error::ScreeningError;
use cardioscreen_core::ScreeningPipeline;
use cardioscreen_render::page::{render_form_page, render_result_page};
use cardioscreen_render::view::result_view;

use crate::form::ScreenForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub model_version: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        model_version: state.model.version().to_string(),
    })
}

pub async fn form_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    render_form_page(&state.model_panel(), None)
        .map(Html)
        .map_err(internal)
}

/// Run one screening. User-correctable problems re-render the form with the
/// message; a predictor failure is a generic 500 — the user gets no partial
/// result.
pub async fn screen(
    State(state): State<AppState>,
    Form(form): Form<ScreenForm>,
) -> Result<(StatusCode, Html<String>), (StatusCode, &'static str)> {
    let request_id = Uuid::new_v4();
    let span = info_span!("screen", %request_id);
    let _guard = span.enter();

    let raw = match form.into_raw_input() {
        Ok(raw) => raw,
        Err(e) => return rejected(&state, &e.to_string()),
    };

    let pipeline = ScreeningPipeline::new(&*state.model, &*state.model);
    match pipeline.run(&raw) {
        Ok(result) => {
            let html = render_result_page(&result_view(&result)).map_err(internal)?;
            Ok((StatusCode::OK, Html(html)))
        }
        Err(ScreeningError::Validation(e)) => rejected(&state, &e.to_string()),
        Err(ScreeningError::Prediction(cause)) => {
            error!(%request_id, %cause, "prediction failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "The risk analysis could not be completed. Please try again later.",
            ))
        }
    }
}

/// Re-render the form with a user-correctable rejection message.
fn rejected(
    state: &AppState,
    message: &str,
) -> Result<(StatusCode, Html<String>), (StatusCode, &'static str)> {
    let html = render_form_page(&state.model_panel(), Some(message)).map_err(internal)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)))
}

fn internal(e: cardioscreen_render::RenderError) -> (StatusCode, &'static str) {
    error!(error = %e, "render failure");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}
