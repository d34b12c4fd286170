//! Corrective action lookup

use crate::severity::Severity;

/// Map a severity to its fixed recommended action
///
/// Total by construction; there is a 1:1 action per severity.
pub fn recommended_action(severity: Severity) -> &'static str {
    match severity {
        Severity::VeryHigh => "Immediate Isolation and Load Rerouting",
        Severity::High => "Activate Load Balancing and Alert Operator",
        Severity::Medium => "Power Factor Correction and Monitor",
        Severity::Moderate => "Continuous Monitoring",
        Severity::Low => "Normal Operation - No Action Needed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_per_severity() {
        assert_eq!(
            recommended_action(Severity::VeryHigh),
            "Immediate Isolation and Load Rerouting"
        );
        assert_eq!(
            recommended_action(Severity::High),
            "Activate Load Balancing and Alert Operator"
        );
        assert_eq!(
            recommended_action(Severity::Medium),
            "Power Factor Correction and Monitor"
        );
        assert_eq!(
            recommended_action(Severity::Moderate),
            "Continuous Monitoring"
        );
        assert_eq!(
            recommended_action(Severity::Low),
            "Normal Operation - No Action Needed"
        );
    }
}
