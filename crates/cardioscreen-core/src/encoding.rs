//! Fixed feature encodings.
//!
//! The tables here are part of the trained artifact's contract: the model was
//! fit against exactly these encodings, so they are named constants rather
//! than inline branching.

use crate::models::features::FeatureVector;
use crate::models::intake::RawInput;

/// Exclusive upper bounds of the age buckets. `age < 25` is bucket 0, each
/// 5-year bin advances one bucket, `age >= 80` is bucket 12.
pub const AGE_BUCKET_UPPER_BOUNDS: [u32; 12] =
    [25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80];

/// Map a whole-year age to its model bucket in `[0, 12]`.
///
/// Buckets are half-open `[lower, upper)`; the final bucket is `[80, ∞)`.
pub fn age_category(age: u32) -> u8 {
    AGE_BUCKET_UPPER_BOUNDS
        .iter()
        .position(|&upper| age < upper)
        .unwrap_or(AGE_BUCKET_UPPER_BOUNDS.len()) as u8
}

/// Body-mass index from centimetres and kilograms.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Encode a validated [`RawInput`] into the fixed 7-entry [`FeatureVector`].
///
/// Pure and total for any input that passed [`crate::validate::validate`]:
/// the same input always yields a bit-identical vector.
pub fn derive_features(raw: &RawInput) -> FeatureVector {
    FeatureVector {
        age_category: age_category(raw.age),
        general_health_score: raw.general_health.score(),
        diabetes_score: raw.diabetes_status.score(),
        arthritis: u8::from(raw.has_arthritis),
        smoking_history: u8::from(raw.has_smoking_history),
        exercise: u8::from(raw.exercises_regularly),
        bmi: bmi(raw.height_cm, raw.weight_kg),
    }
}
