use thiserror::Error;

/// A submission the user can correct. Checks run in a fixed order and the
/// first failure wins, so one run surfaces at most one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("minimum screening age is 18, got {age}")]
    AgeTooLow { age: u32 },

    #[error("height and weight are required and must be greater than zero")]
    MissingAnthropometrics,

    #[error("computed BMI {bmi:.1} is outside the plausible range [15, 60]; check height and weight")]
    ImplausibleBmi { bmi: f64 },
}

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The predictor collaborator failed. Terminal for the request — no
    /// result is produced.
    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// Failure raised by a model collaborator during inference.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InferenceError(pub String);
