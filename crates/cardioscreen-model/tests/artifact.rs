use cardioscreen_model::artifact::{
    validate_background_artifact, validate_model_artifact, BackgroundArtifact, ModelArtifact,
};
use cardioscreen_model::ModelError;

fn model_json() -> serde_json::Value {
    serde_json::json!({
        "model_version": "LogisticRegression_HeartDisease_v1.0",
        "feature_names": [
            "age_category", "general_health", "diabetes",
            "arthritis", "smoking_history", "exercise", "bmi"
        ],
        "scaler": {
            "mean": [6.0, 2.5, 0.2, 0.3, 0.4, 0.7, 28.0],
            "scale": [3.2, 1.0, 0.35, 0.46, 0.49, 0.45, 6.1]
        },
        "coefficients": [0.55, -0.62, 0.31, 0.12, 0.25, -0.18, 0.2],
        "intercept": -2.4,
        "metrics": { "recall": 0.79, "precision": 0.19, "auc": 0.82 }
    })
}

fn background_json() -> serde_json::Value {
    serde_json::json!({
        "feature_names": [
            "age_category", "general_health", "diabetes",
            "arthritis", "smoking_history", "exercise", "bmi"
        ],
        "mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    })
}

#[test]
fn accepts_well_formed_artifacts() {
    let model: ModelArtifact = serde_json::from_value(model_json()).unwrap();
    assert!(validate_model_artifact(&model).is_ok());

    let background: BackgroundArtifact = serde_json::from_value(background_json()).unwrap();
    assert!(validate_background_artifact(&background).is_ok());
}

#[test]
fn rejects_reordered_feature_names() {
    let mut json = model_json();
    json["feature_names"] = serde_json::json!([
        "general_health", "age_category", "diabetes",
        "arthritis", "smoking_history", "exercise", "bmi"
    ]);
    let model: ModelArtifact = serde_json::from_value(json).unwrap();
    match validate_model_artifact(&model) {
        Err(ModelError::Schema(message)) => {
            assert!(message.contains("feature order mismatch"), "got: {message}");
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn rejects_wrong_feature_count() {
    let mut json = model_json();
    json["coefficients"] = serde_json::json!([0.1, 0.2, 0.3]);
    let model: ModelArtifact = serde_json::from_value(json).unwrap();
    assert!(matches!(
        validate_model_artifact(&model),
        Err(ModelError::Schema(_))
    ));
}

#[test]
fn rejects_zero_scaler_scale() {
    let mut json = model_json();
    json["scaler"]["scale"][2] = serde_json::json!(0.0);
    let model: ModelArtifact = serde_json::from_value(json).unwrap();
    match validate_model_artifact(&model) {
        Err(ModelError::Schema(message)) => {
            assert!(message.contains("diabetes"), "got: {message}");
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn rejects_background_with_wrong_names() {
    let mut json = background_json();
    json["feature_names"][6] = serde_json::json!("body_mass");
    let background: BackgroundArtifact = serde_json::from_value(json).unwrap();
    assert!(matches!(
        validate_background_artifact(&background),
        Err(ModelError::Schema(_))
    ));
}

#[test]
fn load_reports_missing_file_path() {
    let err = cardioscreen_model::artifact::load_model_artifact(std::path::Path::new(
        "/nonexistent/model.json",
    ))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/nonexistent/model.json"), "got: {message}");
}
