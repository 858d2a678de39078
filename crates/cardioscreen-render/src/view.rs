//! Display-shaped projections of core types. Every field here is addressable
//! by name in a Tera template.

use serde::{Deserialize, Serialize};

use cardioscreen_core::models::outcome::ScreeningResult;

use crate::labels::{display_name, DECREASE_COLOR, INCREASE_COLOR};

/// One row of the contribution chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorRow {
    pub label: String,
    /// Signed contribution, four decimals.
    pub value_text: String,
    pub increases_risk: bool,
    pub color: String,
    /// Bar length as a percentage of the largest absolute contribution.
    pub bar_pct: u8,
}

/// Everything the result page needs, pre-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    pub is_high_risk: bool,
    /// e.g. "29.4%" — one decimal place.
    pub probability_text: String,
    /// Rows sorted by signed contribution, largest risk-increase first.
    /// Empty when the explainer was unavailable.
    pub factors: Vec<FactorRow>,
    /// True when the explainer failed and the chart is replaced by a warning.
    pub explanation_unavailable: bool,
}

/// Reference model info shown beside the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPanel {
    pub model_version: String,
    pub recall_text: String,
    pub precision_text: String,
    pub auc_text: String,
}

/// Format a probability as a percentage with one decimal place.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Project a [`ScreeningResult`] into its display shape.
pub fn result_view(result: &ScreeningResult) -> ResultView {
    let (factors, explanation_unavailable) = match &result.contributions {
        Some(contributions) => {
            let max_abs = contributions
                .iter()
                .map(|c| c.value.abs())
                .fold(0.0_f64, f64::max);

            let mut sorted: Vec<_> = contributions.iter().collect();
            sorted.sort_by(|a, b| b.value.total_cmp(&a.value));

            let rows = sorted
                .into_iter()
                .map(|c| {
                    let increases_risk = c.value > 0.0;
                    FactorRow {
                        label: display_name(&c.feature_id).to_string(),
                        value_text: format!("{:+.4}", c.value),
                        increases_risk,
                        color: if increases_risk {
                            INCREASE_COLOR.to_string()
                        } else {
                            DECREASE_COLOR.to_string()
                        },
                        bar_pct: if max_abs > 0.0 {
                            ((c.value.abs() / max_abs) * 100.0).round() as u8
                        } else {
                            0
                        },
                    }
                })
                .collect();
            (rows, false)
        }
        None => (Vec::new(), true),
    };

    ResultView {
        is_high_risk: result.is_high_risk,
        probability_text: format_percent(result.probability),
        factors,
        explanation_unavailable,
    }
}
