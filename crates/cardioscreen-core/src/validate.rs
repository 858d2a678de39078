use crate::encoding::bmi;
use crate::error::ValidationError;
use crate::models::intake::RawInput;

/// The model was trained on adults only.
pub const MIN_SCREENING_AGE: u32 = 18;

/// Plausibility band for a derived BMI. A sanity guard against data-entry
/// errors (height given in metres, swapped fields), not a clinical bound.
pub const BMI_PLAUSIBLE_MIN: f64 = 15.0;
pub const BMI_PLAUSIBLE_MAX: f64 = 60.0;

/// Check a submission before any model call.
///
/// Checks run in order and short-circuit: age, then presence of height and
/// weight, then BMI plausibility. Only the first applicable error is
/// surfaced per run.
pub fn validate(raw: &RawInput) -> Result<(), ValidationError> {
    if raw.age < MIN_SCREENING_AGE {
        return Err(ValidationError::AgeTooLow { age: raw.age });
    }
    if raw.height_cm <= 0.0 || raw.weight_kg <= 0.0 {
        return Err(ValidationError::MissingAnthropometrics);
    }
    let bmi = bmi(raw.height_cm, raw.weight_kg);
    if !(BMI_PLAUSIBLE_MIN..=BMI_PLAUSIBLE_MAX).contains(&bmi) {
        return Err(ValidationError::ImplausibleBmi { bmi });
    }
    Ok(())
}
