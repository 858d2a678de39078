//! The screening pipeline: validate → derive features → predict → explain.
//!
//! The trained classifier and the explainer are opaque collaborators behind
//! [`Predictor`] and [`Explainer`]. They are loaded once at startup, shared
//! read-only across requests, and swapped for fixed doubles in tests.

use tracing::{info, warn};

use crate::encoding::derive_features;
use crate::error::{InferenceError, ScreeningError};
use crate::models::features::{FeatureVector, FEATURE_COUNT, FEATURE_IDS};
use crate::models::intake::RawInput;
use crate::models::outcome::{FactorContribution, ScreeningResult};
use crate::validate::validate;

/// Decision threshold for the high-risk classification. Equality counts as
/// high risk. Overridable via [`ScreeningPipeline::with_threshold`]; the
/// trained artifact's documented operating point is this default.
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.5;

/// The trained classifier. Returns the positive-class probability in `[0, 1]`
/// for a feature vector in the fixed column order.
pub trait Predictor: Send + Sync {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, InferenceError>;
}

/// The explainability collaborator. Returns one signed contribution per
/// feature, position-matched to [`FEATURE_IDS`]: positive pushes toward high
/// risk, negative toward low risk.
pub trait Explainer: Send + Sync {
    fn explain(&self, features: &FeatureVector)
        -> Result<[f64; FEATURE_COUNT], InferenceError>;
}

/// One screening run over injected collaborators. Holds no state beyond the
/// borrows, so construction per request is free.
pub struct ScreeningPipeline<'a> {
    predictor: &'a dyn Predictor,
    explainer: &'a dyn Explainer,
    threshold: f64,
}

impl<'a> ScreeningPipeline<'a> {
    pub fn new(predictor: &'a dyn Predictor, explainer: &'a dyn Explainer) -> Self {
        Self {
            predictor,
            explainer,
            threshold: DEFAULT_RISK_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the full pipeline for one submission.
    ///
    /// Validation failures and predictor failures abort the run. An explainer
    /// failure does not: the classification is still returned, with
    /// `contributions` absent, so the caller can render the result without
    /// the factor breakdown.
    pub fn run(&self, raw: &RawInput) -> Result<ScreeningResult, ScreeningError> {
        validate(raw)?;
        let features = derive_features(raw);

        let probability = self
            .predictor
            .predict_proba(&features)
            .map_err(|e| ScreeningError::Prediction(e.to_string()))?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScreeningError::Prediction(format!(
                "predictor returned {probability}, expected a probability in [0, 1]"
            )));
        }

        let contributions = match self.explainer.explain(&features) {
            Ok(values) => Some(
                FEATURE_IDS
                    .iter()
                    .zip(values)
                    .map(|(id, value)| FactorContribution {
                        feature_id: (*id).to_string(),
                        value,
                    })
                    .collect(),
            ),
            Err(e) => {
                warn!(error = %e, "explainer failed, returning result without contributions");
                None
            }
        };

        let is_high_risk = probability >= self.threshold;
        info!(probability, is_high_risk, "screening completed");

        Ok(ScreeningResult {
            probability,
            is_high_risk,
            contributions,
            screened_at: jiff::Timestamp::now(),
        })
    }
}
