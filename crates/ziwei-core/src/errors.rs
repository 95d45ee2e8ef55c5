//! Chart model error types.
//!
//! Absence (no palace for an age, no annual flow for a year) is never an error
//! and is represented with `Option` by the engine. These variants cover data the
//! upstream chart generator should never have produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A palace name outside the fixed 16-token vocabulary.
    #[error("Unrecognized palace name: {name}")]
    UnrecognizedPalace { name: String },

    /// The chart violates a structural invariant (palace count, numbering, uniqueness).
    #[error("Invalid chart: {0}")]
    InvalidChart(String),

    /// Chart JSON could not be parsed.
    #[error("Chart JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
