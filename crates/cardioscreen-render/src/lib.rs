//! cardioscreen-render
//!
//! The result-rendering boundary. The core emits a structured
//! `ScreeningResult`; this crate maps it to display text and HTML via Tera
//! templates. No screening logic lives here.

pub mod error;
pub mod labels;
pub mod page;
pub mod view;

pub use error::RenderError;
