//! cardioscreen-web
//!
//! The HTTP boundary: serves the input form, runs the screening pipeline on
//! submission, and renders the result page. Owns process wiring — tracing,
//! configuration, and the one-time model load shared read-only across
//! requests.

pub mod form;
pub mod handlers;
pub mod state;
