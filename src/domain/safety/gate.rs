//! Business decision on whether an approved report may be released

use super::outcome::RejectionReason;
use super::report::{RiskLevel, SafetyReport};

/// Derives the workflow's notion of "safe" from named report fields.
///
/// A report is safe when it does not declare `is_safe: false` and its
/// `risk_level` does not exceed `max_allowed_risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyGate {
    max_allowed_risk: RiskLevel,
}

impl SafetyGate {
    pub fn new(max_allowed_risk: RiskLevel) -> Self {
        Self { max_allowed_risk }
    }

    pub fn max_allowed_risk(&self) -> RiskLevel {
        self.max_allowed_risk
    }

    pub fn assess(&self, report: &SafetyReport) -> Result<(), RejectionReason> {
        if report.is_safe == Some(false) {
            return Err(RejectionReason::policy_violation(
                "report declares is_safe = false",
            ));
        }

        if report.risk_level > self.max_allowed_risk {
            return Err(RejectionReason::policy_violation(format!(
                "risk_level {} exceeds the allowed maximum {}",
                report.risk_level, self.max_allowed_risk
            )));
        }

        Ok(())
    }
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::new(RiskLevel::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::safety::RejectionKind;

    fn report(risk_level: RiskLevel, is_safe: Option<bool>) -> SafetyReport {
        SafetyReport {
            decision_summary: "Proceed with monitoring.".to_string(),
            calculated_value: 1000.62,
            unit: "PSI".to_string(),
            risk_level,
            manual_references: vec![],
            is_safe,
        }
    }

    #[test]
    fn test_default_gate_passes_high_risk_reports() {
        let gate = SafetyGate::default();

        assert!(gate.assess(&report(RiskLevel::Low, None)).is_ok());
        assert!(gate.assess(&report(RiskLevel::High, None)).is_ok());
        assert!(gate.assess(&report(RiskLevel::High, Some(true))).is_ok());
    }

    #[test]
    fn test_explicit_unsafe_flag_is_refused() {
        let reason = SafetyGate::default()
            .assess(&report(RiskLevel::Low, Some(false)))
            .unwrap_err();

        assert_eq!(reason.kind, RejectionKind::PolicyViolation);
        assert!(reason.detail.contains("is_safe"));
    }

    #[test]
    fn test_tightened_gate_refuses_higher_risk() {
        let gate = SafetyGate::new(RiskLevel::Medium);

        assert!(gate.assess(&report(RiskLevel::Medium, None)).is_ok());

        let reason = gate.assess(&report(RiskLevel::High, None)).unwrap_err();
        assert_eq!(
            reason.detail,
            "risk_level HIGH exceeds the allowed maximum MEDIUM"
        );
    }
}
