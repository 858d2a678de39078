use serde::{Deserialize, Serialize};

/// Number of entries in a [`FeatureVector`]. Fixed by the trained artifact.
pub const FEATURE_COUNT: usize = 7;

/// Stable feature identifiers, in model column order. The explainer maps
/// contributions back to features by position, so this order is load-bearing:
/// changing it (or the count) invalidates every deployed artifact.
pub const FEATURE_IDS: [&str; FEATURE_COUNT] = [
    "age_category",
    "general_health",
    "diabetes",
    "arthritis",
    "smoking_history",
    "exercise",
    "bmi",
];

/// The encoded representation consumed by the predictor. Field order mirrors
/// [`FEATURE_IDS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Age bucket in `[0, 12]`: 5-year bins from 25 up, open-ended at 80+.
    pub age_category: u8,
    /// Ordinal general health, `[0, 4]`.
    pub general_health_score: u8,
    /// One of `{0, 0.5, 0.75, 1}`.
    pub diabetes_score: f64,
    pub arthritis: u8,
    pub smoking_history: u8,
    pub exercise: u8,
    /// `weight_kg / (height_cm / 100)²`.
    pub bmi: f64,
}

impl FeatureVector {
    /// The vector in model column order, ready for the collaborators.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.age_category),
            f64::from(self.general_health_score),
            self.diabetes_score,
            f64::from(self.arthritis),
            f64::from(self.smoking_history),
            f64::from(self.exercise),
            self.bmi,
        ]
    }
}
