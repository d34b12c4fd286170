//! Severity inference over linguistic categories
//!
//! The rules deliberately overlap, so they are evaluated strictly top-down
//! and the first match wins. Reordering them changes the output for
//! overlapping inputs (e.g. VeryHigh voltage with Unbalanced load must hit
//! rule 1, not rule 2).

use crate::fuzzify::{FrequencyStability, LoadBalance, VoltageLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of the feed condition
///
/// Named distinctly from [`VoltageLevel`] even though some variants
/// coincide; the two scales are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    VeryHigh,
    High,
    Medium,
    Moderate,
    Low,
}

impl Severity {
    /// Fixed score for this severity, in [0, 100]. Never interpolated.
    pub fn score(&self) -> u8 {
        match self {
            Severity::VeryHigh => 90,
            Severity::High => 75,
            Severity::Medium => 60,
            Severity::Moderate => 40,
            Severity::Low => 20,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::VeryHigh => "Very High Severity",
            Severity::High => "High Severity",
            Severity::Medium => "Medium Severity",
            Severity::Moderate => "Moderate Severity",
            Severity::Low => "Low Severity",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity paired with its fixed score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub severity: Severity,
    pub score: u8,
}

impl From<Severity> for SeverityAssessment {
    fn from(severity: Severity) -> Self {
        Self {
            severity,
            score: severity.score(),
        }
    }
}

/// Infer severity from the three linguistic categories
///
/// Total over all 60 category triples: the ordered rules plus the
/// catch-all default leave no gap.
pub fn assess(
    voltage: VoltageLevel,
    frequency: FrequencyStability,
    load: LoadBalance,
) -> SeverityAssessment {
    use crate::fuzzify::{FrequencyStability as F, LoadBalance as L, VoltageLevel as V};

    let severity = if voltage == V::VeryHigh || (voltage == V::High && frequency == F::Unstable) {
        Severity::VeryHigh
    } else if voltage == V::High && (frequency == F::SlightlyUnstable || load == L::Unbalanced) {
        Severity::High
    } else if voltage == V::Medium && (frequency == F::Unstable || load == L::SlightlyUnbalanced) {
        Severity::Medium
    } else if matches!(voltage, V::Low | V::VeryLow)
        && frequency == F::Stable
        && matches!(load, L::Balanced | L::VeryBalanced)
    {
        Severity::Low
    } else {
        Severity::Moderate
    };

    severity.into()
}
