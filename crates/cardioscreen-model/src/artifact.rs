//! On-disk artifact schema.
//!
//! Two JSON files exported alongside the trained pipeline: the model file
//! (scaler parameters, coefficients, reference metrics) and the explainer
//! background file (column means of the standardized background dataset).
//! Both carry `feature_names` so a stale or reordered export is caught at
//! load time instead of silently mislabeling contributions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cardioscreen_core::models::features::{FEATURE_COUNT, FEATURE_IDS};

use crate::error::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_version: String,
    pub feature_names: Vec<String>,
    pub scaler: Scaler,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub metrics: ModelMetrics,
}

/// Standard-scaler parameters fitted during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Reference performance of the trained artifact, shown on the form page.
/// The model is tuned for high recall, which is the right trade-off for an
/// early screening signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub recall: f64,
    pub precision: f64,
    pub auc: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundArtifact {
    pub feature_names: Vec<String>,
    /// Column means of the standardized background dataset.
    pub mean: Vec<f64>,
}

pub fn load_model_artifact(path: &Path) -> Result<ModelArtifact, ModelError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: ModelArtifact =
        serde_json::from_str(&contents).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_model_artifact(&artifact)?;
    Ok(artifact)
}

pub fn load_background_artifact(path: &Path) -> Result<BackgroundArtifact, ModelError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: BackgroundArtifact =
        serde_json::from_str(&contents).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_background_artifact(&artifact)?;
    Ok(artifact)
}

pub fn validate_model_artifact(artifact: &ModelArtifact) -> Result<(), ModelError> {
    check_feature_names("model", &artifact.feature_names)?;
    check_length("model coefficients", artifact.coefficients.len())?;
    check_length("scaler mean", artifact.scaler.mean.len())?;
    check_length("scaler scale", artifact.scaler.scale.len())?;

    for (i, value) in artifact.scaler.scale.iter().enumerate() {
        if !value.is_finite() || *value == 0.0 {
            return Err(ModelError::Schema(format!(
                "scaler scale for '{}' is {value}, expected a finite non-zero value",
                FEATURE_IDS[i]
            )));
        }
    }
    for (i, value) in artifact.coefficients.iter().enumerate() {
        if !value.is_finite() {
            return Err(ModelError::Schema(format!(
                "coefficient for '{}' is {value}",
                FEATURE_IDS[i]
            )));
        }
    }
    if !artifact.intercept.is_finite() {
        return Err(ModelError::Schema(format!(
            "intercept is {}",
            artifact.intercept
        )));
    }
    Ok(())
}

pub fn validate_background_artifact(artifact: &BackgroundArtifact) -> Result<(), ModelError> {
    check_feature_names("background", &artifact.feature_names)?;
    check_length("background mean", artifact.mean.len())?;
    for (i, value) in artifact.mean.iter().enumerate() {
        if !value.is_finite() {
            return Err(ModelError::Schema(format!(
                "background mean for '{}' is {value}",
                FEATURE_IDS[i]
            )));
        }
    }
    Ok(())
}

fn check_length(what: &str, len: usize) -> Result<(), ModelError> {
    if len != FEATURE_COUNT {
        return Err(ModelError::Schema(format!(
            "{what} has {len} entries, expected {FEATURE_COUNT}"
        )));
    }
    Ok(())
}

fn check_feature_names(which: &str, names: &[String]) -> Result<(), ModelError> {
    if names.len() != FEATURE_COUNT {
        return Err(ModelError::Schema(format!(
            "{which} artifact lists {} feature names, expected {FEATURE_COUNT}",
            names.len()
        )));
    }
    for (got, expected) in names.iter().zip(FEATURE_IDS) {
        if got != expected {
            return Err(ModelError::Schema(format!(
                "{which} artifact feature order mismatch: found '{got}' where '{expected}' \
                 was expected"
            )));
        }
    }
    Ok(())
}
