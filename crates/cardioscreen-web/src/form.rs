//! The form boundary: declared field bounds and conversion into the domain
//! input. These bounds mirror the form widget limits; the pipeline still
//! enforces its own validation downstream.

use serde::Deserialize;
use thiserror::Error;

use cardioscreen_core::models::intake::{DiabetesStatus, GeneralHealth, RawInput};

/// Upper bound declared on the age field.
pub const MAX_FORM_AGE: u32 = 100;
/// Upper bound declared on both the height (cm) and weight (kg) fields.
pub const MAX_FORM_MEASUREMENT: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> bool {
        matches!(value, YesNo::Yes)
    }
}

/// One form submission, field names matching the template inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenForm {
    pub age: u32,
    pub general_health: GeneralHealth,
    pub diabetes_status: DiabetesStatus,
    pub exercises_regularly: YesNo,
    pub has_smoking_history: YesNo,
    pub has_arthritis: YesNo,
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("age must be between 0 and {MAX_FORM_AGE}")]
    AgeOutOfBounds,

    #[error("height and weight must be between 0 and {MAX_FORM_MEASUREMENT}")]
    MeasurementOutOfBounds,
}

impl ScreenForm {
    /// Enforce the declared field bounds, then hand over to the domain.
    pub fn into_raw_input(self) -> Result<RawInput, FormError> {
        if self.age > MAX_FORM_AGE {
            return Err(FormError::AgeOutOfBounds);
        }
        if !(0.0..=MAX_FORM_MEASUREMENT).contains(&self.height_cm)
            || !(0.0..=MAX_FORM_MEASUREMENT).contains(&self.weight_kg)
        {
            return Err(FormError::MeasurementOutOfBounds);
        }
        Ok(RawInput {
            age: self.age,
            general_health: self.general_health,
            diabetes_status: self.diabetes_status,
            exercises_regularly: self.exercises_regularly.into(),
            has_smoking_history: self.has_smoking_history.into(),
            has_arthritis: self.has_arthritis.into(),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
        })
    }
}
