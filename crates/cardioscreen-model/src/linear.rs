//! Inference over a loaded logistic-regression artifact.
//!
//! Probability is `sigmoid(w·z + b)` over the standardized feature vector.
//! Contributions use the linear explainer's exact attribution for a linear
//! model: `w_i · (z_i − background_mean_i)`, so a feature sitting at the
//! background mean contributes nothing.

use std::path::Path;

use tracing::info;

use cardioscreen_core::error::InferenceError;
use cardioscreen_core::models::features::{FeatureVector, FEATURE_COUNT};
use cardioscreen_core::{Explainer, Predictor};

use crate::artifact::{
    load_background_artifact, load_model_artifact, BackgroundArtifact, ModelArtifact,
    ModelMetrics,
};
use crate::error::ModelError;

/// A fully loaded, immutable model collaborator. Constructed once at startup
/// and shared read-only across requests.
pub struct LinearModel {
    version: String,
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    scaler_mean: [f64; FEATURE_COUNT],
    scaler_scale: [f64; FEATURE_COUNT],
    background_mean: [f64; FEATURE_COUNT],
    metrics: ModelMetrics,
}

impl LinearModel {
    /// Load and cross-check both artifact files. Any failure here must abort
    /// startup.
    pub fn load(model_path: &Path, background_path: &Path) -> Result<Self, ModelError> {
        let model = load_model_artifact(model_path)?;
        let background = load_background_artifact(background_path)?;
        let loaded = Self::from_artifacts(model, background)?;
        info!(version = %loaded.version, "model artifacts loaded");
        Ok(loaded)
    }

    pub fn from_artifacts(
        model: ModelArtifact,
        background: BackgroundArtifact,
    ) -> Result<Self, ModelError> {
        crate::artifact::validate_model_artifact(&model)?;
        crate::artifact::validate_background_artifact(&background)?;
        Ok(Self {
            version: model.model_version,
            coefficients: to_array(&model.coefficients),
            intercept: model.intercept,
            scaler_mean: to_array(&model.scaler.mean),
            scaler_scale: to_array(&model.scaler.scale),
            background_mean: to_array(&background.mean),
            metrics: model.metrics,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metrics(&self) -> &ModelMetrics {
        &self.metrics
    }

    fn standardize(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let raw = features.as_array();
        let mut z = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            z[i] = (raw[i] - self.scaler_mean[i]) / self.scaler_scale[i];
        }
        z
    }
}

impl Predictor for LinearModel {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let z = self.standardize(features);
        let logit: f64 = self
            .coefficients
            .iter()
            .zip(z)
            .map(|(w, zi)| w * zi)
            .sum::<f64>()
            + self.intercept;
        let probability = sigmoid(logit);
        if !probability.is_finite() {
            return Err(InferenceError(format!(
                "non-finite probability from logit {logit}"
            )));
        }
        Ok(probability)
    }
}

impl Explainer for LinearModel {
    fn explain(
        &self,
        features: &FeatureVector,
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        let z = self.standardize(features);
        let mut contributions = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            contributions[i] = self.coefficients[i] * (z[i] - self.background_mean[i]);
            if !contributions[i].is_finite() {
                return Err(InferenceError(format!(
                    "non-finite contribution at position {i}"
                )));
            }
        }
        Ok(contributions)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Length is checked by artifact validation before this is called.
fn to_array(values: &[f64]) -> [f64; FEATURE_COUNT] {
    let mut array = [0.0; FEATURE_COUNT];
    array.copy_from_slice(values);
    array
}
