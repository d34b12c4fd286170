//! Validation Error Types

use serde::Serialize;
use thiserror::Error;

/// Errors during reading validation
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
pub enum ValidationError {
    /// Raw field did not parse as a number
    #[error("{field} value {raw:?} is not a number")]
    NotANumber { field: &'static str, raw: String },

    /// Parsed value is NaN or infinity
    #[error("{field} value {value} is not finite")]
    NonFinite { field: &'static str, value: f64 },

    /// Raw field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
