//! Feed Condition Classifier
//!
//! Classifies an electrical feed from three readings (voltage deviation,
//! frequency, load imbalance) into a severity and a recommended action.
//! The pipeline is pure and stateless: fuzzify each reading into a
//! linguistic category, run the priority-ordered severity rules, then look
//! up the action for the resulting severity.

mod advisor;
mod error;
mod fuzzify;
mod severity;

pub use advisor::recommended_action;
pub use error::ClassifierError;
pub use fuzzify::{
    fuzzify_frequency, fuzzify_load, fuzzify_voltage, FrequencyStability, LoadBalance,
    VoltageLevel,
};
pub use severity::{assess, Severity, SeverityAssessment};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One set of raw feed readings
///
/// No range validation: values may be negative or arbitrarily large and
/// simply land in the nearest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Voltage deviation
    pub voltage: f64,
    /// Frequency (Hz)
    pub frequency: f64,
    /// Load imbalance
    pub load: f64,
}

/// Complete classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Fuzzified voltage category
    pub voltage_level: VoltageLevel,
    /// Fuzzified frequency category
    pub frequency_stability: FrequencyStability,
    /// Fuzzified load category
    pub load_balance: LoadBalance,
    /// Inferred severity with its fixed score
    pub assessment: SeverityAssessment,
    /// Recommended corrective action
    pub recommendation: &'static str,
}

/// Classify one reading end to end
///
/// Rejects NaN and infinity up front so the rule pipeline only ever sees
/// finite numbers; for finite input it cannot fail.
pub fn classify(reading: &Reading) -> Result<Classification, ClassifierError> {
    for (field, value) in [
        ("voltage", reading.voltage),
        ("frequency", reading.frequency),
        ("load", reading.load),
    ] {
        if !value.is_finite() {
            return Err(ClassifierError::NonFiniteReading { field, value });
        }
    }

    let voltage_level = fuzzify_voltage(reading.voltage);
    let frequency_stability = fuzzify_frequency(reading.frequency);
    let load_balance = fuzzify_load(reading.load);
    let assessment = assess(voltage_level, frequency_stability, load_balance);

    debug!(
        voltage = %voltage_level,
        frequency = %frequency_stability,
        load = %load_balance,
        severity = %assessment.severity,
        score = assessment.score,
        "classified reading"
    );

    Ok(Classification {
        voltage_level,
        frequency_stability,
        load_balance,
        assessment,
        recommendation: recommended_action(assessment.severity),
    })
}
