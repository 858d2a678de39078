use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use eyre::{Result, WrapErr};
use tower_http::cors::CorsLayer;

use cardioscreen_model::LinearModel;
use cardioscreen_web::handlers;
use cardioscreen_web::state::AppState;

/// # Environment variables
/// - `CARDIOSCREEN_MODEL_PATH`: model artifact (default "model.json")
/// - `CARDIOSCREEN_BACKGROUND_PATH`: explainer background artifact
///   (default "shap_background.json")
/// - `CARDIOSCREEN_ADDR`: bind address (default "0.0.0.0:3000")
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let model_path =
        std::env::var("CARDIOSCREEN_MODEL_PATH").unwrap_or_else(|_| "model.json".into());
    let background_path = std::env::var("CARDIOSCREEN_BACKGROUND_PATH")
        .unwrap_or_else(|_| "shap_background.json".into());
    let addr = std::env::var("CARDIOSCREEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    // Model load is fatal: no request may be served with a missing or
    // corrupt artifact.
    let model = LinearModel::load(Path::new(&model_path), Path::new(&background_path))
        .wrap_err_with(|| {
            format!(
                "failed to load model artifacts ({model_path}, {background_path}); \
                 set CARDIOSCREEN_MODEL_PATH and CARDIOSCREEN_BACKGROUND_PATH"
            )
        })?;

    let state = AppState::new(model);

    let app = Router::new()
        .route("/", get(handlers::form_page))
        .route("/screen", post(handlers::screen))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("-- Starting cardioscreen on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
