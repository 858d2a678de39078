use cardioscreen_core::error::{InferenceError, ScreeningError};
use cardioscreen_core::models::features::{FeatureVector, FEATURE_COUNT, FEATURE_IDS};
use cardioscreen_core::models::intake::{DiabetesStatus, GeneralHealth, RawInput};
use cardioscreen_core::{Explainer, Predictor, ScreeningPipeline};

struct FixedPredictor(f64);

impl Predictor for FixedPredictor {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        Ok(self.0)
    }
}

struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        Err(InferenceError("artifact rejected input".to_string()))
    }
}

struct FixedExplainer([f64; FEATURE_COUNT]);

impl Explainer for FixedExplainer {
    fn explain(
        &self,
        _features: &FeatureVector,
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        Ok(self.0)
    }
}

struct FailingExplainer;

impl Explainer for FailingExplainer {
    fn explain(
        &self,
        _features: &FeatureVector,
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        Err(InferenceError("background data mismatch".to_string()))
    }
}

fn valid_input() -> RawInput {
    RawInput {
        age: 45,
        general_health: GeneralHealth::Fair,
        diabetes_status: DiabetesStatus::No,
        exercises_regularly: false,
        has_smoking_history: true,
        has_arthritis: false,
        height_cm: 175.0,
        weight_kg: 90.0,
    }
}

const CONTRIBUTIONS: [f64; FEATURE_COUNT] = [0.12, -0.05, 0.0, 0.01, 0.2, -0.1, 0.3];

#[test]
fn successful_run_produces_full_result() {
    let predictor = FixedPredictor(0.7);
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let result = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap();

    assert_eq!(result.probability, 0.7);
    assert!(result.is_high_risk);

    let contributions = result.contributions.expect("contributions present");
    assert_eq!(contributions.len(), FEATURE_COUNT);
    for (entry, (id, value)) in contributions.iter().zip(FEATURE_IDS.iter().zip(CONTRIBUTIONS)) {
        assert_eq!(entry.feature_id, *id);
        assert_eq!(entry.value, value);
    }
}

#[test]
fn threshold_equality_is_high_risk() {
    let predictor = FixedPredictor(0.5);
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let result = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap();
    assert!(result.is_high_risk);
}

#[test]
fn below_threshold_is_low_risk() {
    let predictor = FixedPredictor(0.499_999);
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let result = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap();
    assert!(!result.is_high_risk);
}

#[test]
fn custom_threshold_moves_the_decision() {
    let predictor = FixedPredictor(0.4);
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let result = ScreeningPipeline::new(&predictor, &explainer)
        .with_threshold(0.3)
        .run(&valid_input())
        .unwrap();
    assert!(result.is_high_risk);
}

#[test]
fn validation_failure_stops_before_any_model_call() {
    struct PanickingPredictor;
    impl Predictor for PanickingPredictor {
        fn predict_proba(&self, _f: &FeatureVector) -> Result<f64, InferenceError> {
            panic!("predictor must not be called for invalid input");
        }
    }

    let raw = RawInput {
        age: 17,
        ..valid_input()
    };
    let predictor = PanickingPredictor;
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let err = ScreeningPipeline::new(&predictor, &explainer)
        .run(&raw)
        .unwrap_err();
    assert!(matches!(err, ScreeningError::Validation(_)));
}

#[test]
fn predictor_failure_is_terminal() {
    let predictor = FailingPredictor;
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let err = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap_err();
    match err {
        ScreeningError::Prediction(message) => {
            assert!(message.contains("artifact rejected input"));
        }
        other => panic!("expected Prediction, got {other:?}"),
    }
}

#[test]
fn out_of_range_probability_is_a_prediction_failure() {
    let predictor = FixedPredictor(1.2);
    let explainer = FixedExplainer(CONTRIBUTIONS);
    let err = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap_err();
    assert!(matches!(err, ScreeningError::Prediction(_)));
}

#[test]
fn explainer_failure_degrades_gracefully() {
    let predictor = FixedPredictor(0.6);
    let explainer = FailingExplainer;
    let result = ScreeningPipeline::new(&predictor, &explainer)
        .run(&valid_input())
        .unwrap();
    assert_eq!(result.probability, 0.6);
    assert!(result.is_high_risk);
    assert!(result.contributions.is_none());
}
