//! Engine error types.

use ziwei_core::errors::CoreError;

/// Errors from engine operations.
///
/// Structural absence is not an error: lookups that may legitimately find
/// nothing return `Option` or an "unavailable" outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The chart or a palace name violated the model vocabulary.
    #[error("chart error: {0}")]
    Core(#[from] CoreError),

    /// A caller-supplied argument was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
