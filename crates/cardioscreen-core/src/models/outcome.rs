use serde::{Deserialize, Serialize};

/// One signed per-factor contribution from the explainer. Positive pushes
/// the score toward high risk, negative toward low risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    /// One of [`super::features::FEATURE_IDS`].
    pub feature_id: String,
    pub value: f64,
}

/// The outcome of one pipeline run. Created per submission, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Positive-class probability in `[0, 1]`.
    pub probability: f64,
    /// `probability >= threshold` (default 0.5, equality counts as high).
    pub is_high_risk: bool,
    /// One entry per feature, in feature order. `None` when the explainer
    /// failed — the classification still stands, only the factor breakdown
    /// is unavailable.
    pub contributions: Option<Vec<FactorContribution>>,
    pub screened_at: jiff::Timestamp,
}
