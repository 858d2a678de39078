use serde::{Deserialize, Serialize};

/// Self-rated general health on the standard ordered 5-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralHealth {
    VeryPoor,
    Poor,
    Fair,
    Good,
    VeryGood,
}

impl GeneralHealth {
    /// Ordinal encoding consumed by the model: 0 = very poor … 4 = very good.
    pub fn score(self) -> u8 {
        match self {
            GeneralHealth::VeryPoor => 0,
            GeneralHealth::Poor => 1,
            GeneralHealth::Fair => 2,
            GeneralHealth::Good => 3,
            GeneralHealth::VeryGood => 4,
        }
    }
}

/// Diabetes history. The encoding is intentionally non-linear: borderline
/// and gestational-only histories sit between a clean "no" and a full "yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesStatus {
    No,
    PreDiabetesOrBorderline,
    YesGestationalOnly,
    Yes,
}

impl DiabetesStatus {
    pub fn score(self) -> f64 {
        match self {
            DiabetesStatus::No => 0.0,
            DiabetesStatus::PreDiabetesOrBorderline => 0.5,
            DiabetesStatus::YesGestationalOnly => 0.75,
            DiabetesStatus::Yes => 1.0,
        }
    }
}

/// The seven self-reported answers plus the two raw anthropometric
/// measurements, exactly as captured from the form. Never mutated — only
/// transformed into a [`super::features::FeatureVector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Whole years.
    pub age: u32,
    pub general_health: GeneralHealth,
    pub diabetes_status: DiabetesStatus,
    /// At least 30 minutes of exercise per day.
    pub exercises_regularly: bool,
    pub has_smoking_history: bool,
    pub has_arthritis: bool,
    pub height_cm: f64,
    pub weight_kg: f64,
}
