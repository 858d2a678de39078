//! Display names and chart colors for the seven factors.

use cardioscreen_core::models::features::{FEATURE_COUNT, FEATURE_IDS};

/// Bar color for a factor that pushes the score toward high risk.
pub const INCREASE_COLOR: &str = "#D9534F";
/// Bar color for a factor that pushes the score toward low risk.
pub const DECREASE_COLOR: &str = "#5CB85C";

/// Feature id → display name, position-matched to [`FEATURE_IDS`].
const DISPLAY_NAMES: [&str; FEATURE_COUNT] = [
    "Age Group",
    "General Health",
    "Diabetes History",
    "Arthritis",
    "Smoking History",
    "Physical Activity",
    "Body Mass Index",
];

/// Translate a feature id to its display name. Unknown ids fall back to the
/// id itself so a renderer never drops a contribution on the floor.
pub fn display_name(feature_id: &str) -> &str {
    FEATURE_IDS
        .iter()
        .position(|id| *id == feature_id)
        .map(|i| DISPLAY_NAMES[i])
        .unwrap_or(feature_id)
}
