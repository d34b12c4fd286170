//! Reading validation
//!
//! The classifier is specified only over finite numbers, so every caller
//! path goes through here first. Deliberately no range or plausibility
//! checks: out-of-range values (negative voltage, frequency 0) route into
//! the nearest fuzzification bucket downstream.

use crate::error::ValidationError;
use classifier::Reading;
use serde::Serialize;
use tracing::debug;

/// Result of validating one reading
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether all fields are finite
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Check that one already-numeric value is finite
pub fn validate_field(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

/// Validate a full reading, collecting every failing field
pub fn validate_reading(reading: &Reading) -> ValidationResult {
    let checks = [
        ("voltage", reading.voltage),
        ("frequency", reading.frequency),
        ("load", reading.load),
    ];

    let errors: Vec<ValidationError> = checks
        .iter()
        .filter_map(|&(field, value)| validate_field(field, value).err())
        .collect();

    if errors.is_empty() {
        ValidationResult::valid(checks.len())
    } else {
        debug!(error_count = errors.len(), "reading failed validation");
        ValidationResult::invalid(errors, checks.len())
    }
}

/// Parse one raw text field into a finite number
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        raw: raw.to_string(),
    })?;

    validate_field(field, value)?;
    Ok(value)
}

/// Parse three raw form fields into a reading, collecting every failure
pub fn parse_reading(
    voltage_raw: &str,
    frequency_raw: &str,
    load_raw: &str,
) -> Result<Reading, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut take = |field, raw| match parse_field(field, raw) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let voltage = take("voltage", voltage_raw);
    let frequency = take("frequency", frequency_raw);
    let load = take("load", load_raw);

    match (voltage, frequency, load) {
        (Some(voltage), Some(frequency), Some(load)) => Ok(Reading {
            voltage,
            frequency,
            load,
        }),
        _ => Err(errors),
    }
}
