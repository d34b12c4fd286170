//! Classifier Error Types

use thiserror::Error;

/// Errors during classification
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    /// Reading contained NaN or infinity
    #[error("{field} reading {value} is not a finite number")]
    NonFiniteReading { field: &'static str, value: f64 },
}
