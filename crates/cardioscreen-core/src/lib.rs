//! cardioscreen-core
//!
//! Pure domain types and the screening pipeline. No I/O — the trained
//! classifier and the explainer are injected through the [`pipeline::Predictor`]
//! and [`pipeline::Explainer`] seams, so everything here is deterministic and
//! testable with fixed doubles.

pub mod encoding;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod validate;

pub use pipeline::{Explainer, Predictor, ScreeningPipeline, DEFAULT_RISK_THRESHOLD};
