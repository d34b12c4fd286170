//! Crisp fuzzification of raw readings into linguistic categories
//!
//! Each variable gets its own closed enumeration and a single threshold
//! function. Thresholds are inclusive on the lower side (`<=`), so every
//! finite input lands in exactly one bucket with no boundary ambiguity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Voltage deviation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl VoltageLevel {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            VoltageLevel::VeryLow => "Very Low",
            VoltageLevel::Low => "Low",
            VoltageLevel::Medium => "Medium",
            VoltageLevel::High => "High",
            VoltageLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frequency stability around the 50 Hz nominal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyStability {
    Stable,
    SlightlyUnstable,
    Unstable,
}

impl FrequencyStability {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FrequencyStability::Stable => "Stable",
            FrequencyStability::SlightlyUnstable => "Slightly Unstable",
            FrequencyStability::Unstable => "Unstable",
        }
    }
}

impl fmt::Display for FrequencyStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Load imbalance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBalance {
    VeryBalanced,
    Balanced,
    SlightlyUnbalanced,
    Unbalanced,
}

impl LoadBalance {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            LoadBalance::VeryBalanced => "Very Balanced",
            LoadBalance::Balanced => "Balanced",
            LoadBalance::SlightlyUnbalanced => "Slightly Unbalanced",
            LoadBalance::Unbalanced => "Unbalanced",
        }
    }
}

impl fmt::Display for LoadBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a voltage deviation reading
pub fn fuzzify_voltage(voltage: f64) -> VoltageLevel {
    if voltage <= 2.0 {
        VoltageLevel::VeryLow
    } else if voltage <= 5.0 {
        VoltageLevel::Low
    } else if voltage <= 10.0 {
        VoltageLevel::Medium
    } else if voltage <= 15.0 {
        VoltageLevel::High
    } else {
        VoltageLevel::VeryHigh
    }
}

/// Bucket a frequency reading by its deviation from 50 Hz
pub fn fuzzify_frequency(frequency: f64) -> FrequencyStability {
    let deviation = (frequency - 50.0).abs();
    if deviation <= 0.3 {
        FrequencyStability::Stable
    } else if deviation <= 1.0 {
        FrequencyStability::SlightlyUnstable
    } else {
        FrequencyStability::Unstable
    }
}

/// Bucket a load imbalance reading
pub fn fuzzify_load(load: f64) -> LoadBalance {
    if load <= 5.0 {
        LoadBalance::VeryBalanced
    } else if load <= 10.0 {
        LoadBalance::Balanced
    } else if load <= 20.0 {
        LoadBalance::SlightlyUnbalanced
    } else {
        LoadBalance::Unbalanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voltage_boundaries_inclusive() {
        assert_eq!(fuzzify_voltage(2.0), VoltageLevel::VeryLow);
        assert_eq!(fuzzify_voltage(2.0001), VoltageLevel::Low);
        assert_eq!(fuzzify_voltage(5.0), VoltageLevel::Low);
        assert_eq!(fuzzify_voltage(10.0), VoltageLevel::Medium);
        assert_eq!(fuzzify_voltage(15.0), VoltageLevel::High);
        assert_eq!(fuzzify_voltage(15.0001), VoltageLevel::VeryHigh);
    }

    #[test]
    fn test_frequency_deviation_is_symmetric() {
        assert_eq!(fuzzify_frequency(50.3), FrequencyStability::Stable);
        assert_eq!(fuzzify_frequency(49.7), FrequencyStability::Stable);
        assert_eq!(fuzzify_frequency(50.31), FrequencyStability::SlightlyUnstable);
        assert_eq!(fuzzify_frequency(51.0), FrequencyStability::SlightlyUnstable);
        assert_eq!(fuzzify_frequency(49.0), FrequencyStability::SlightlyUnstable);
        assert_eq!(fuzzify_frequency(51.01), FrequencyStability::Unstable);
    }

    #[test]
    fn test_load_boundaries_inclusive() {
        assert_eq!(fuzzify_load(5.0), LoadBalance::VeryBalanced);
        assert_eq!(fuzzify_load(10.0), LoadBalance::Balanced);
        assert_eq!(fuzzify_load(20.0), LoadBalance::SlightlyUnbalanced);
        assert_eq!(fuzzify_load(20.0001), LoadBalance::Unbalanced);
    }

    #[test]
    fn test_out_of_range_routes_to_nearest_bucket() {
        // No plausibility checks: negative voltage is just VeryLow,
        // frequency 0 is just a large deviation.
        assert_eq!(fuzzify_voltage(-100.0), VoltageLevel::VeryLow);
        assert_eq!(fuzzify_voltage(1e9), VoltageLevel::VeryHigh);
        assert_eq!(fuzzify_frequency(0.0), FrequencyStability::Unstable);
        assert_eq!(fuzzify_load(-5.0), LoadBalance::VeryBalanced);
    }

    #[test]
    fn test_labels_match_display() {
        assert_eq!(VoltageLevel::VeryHigh.to_string(), "Very High");
        assert_eq!(FrequencyStability::SlightlyUnstable.to_string(), "Slightly Unstable");
        assert_eq!(LoadBalance::SlightlyUnbalanced.to_string(), "Slightly Unbalanced");
    }
}
