//! cardioscreen-model
//!
//! The deployed model collaborator: loads the trained logistic pipeline and
//! the explainer background dataset from artifact files at startup, and
//! implements the core's `Predictor` and `Explainer` seams over them.
//!
//! Artifact loading is fail-fast: a missing or malformed file must halt the
//! application before any request is served.

pub mod artifact;
pub mod error;
pub mod linear;

pub use error::ModelError;
pub use linear::LinearModel;
