//! Reading Validation
//!
//! Typed parse and finiteness checks for feed readings, run before the
//! classification pipeline is invoked.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{parse_field, parse_reading, validate_field, validate_reading, ValidationResult};
