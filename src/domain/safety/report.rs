//! Structured safety report schema

use serde::{Deserialize, Serialize};

/// Closed set of risk classifications, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed-shape record a draft must conform to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Core recommendation for the engineer
    pub decision_summary: String,
    /// Numeric result from the engineering tool
    pub calculated_value: f64,
    pub unit: String,
    pub risk_level: RiskLevel,
    /// Ordered manual sections backing the recommendation
    pub manual_references: Vec<String>,
    /// Explicit safety flag, when the author states one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_safe: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_valid_report_parses() {
        let report: SafetyReport = serde_json::from_str(
            r#"{
                "decision_summary": "Proceed with controlled pressure increase.",
                "calculated_value": 125.5,
                "unit": "PSI",
                "risk_level": "LOW",
                "manual_references": ["Manual A p.12", "Safety Spec 4.3"]
            }"#,
        )
        .unwrap();

        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.calculated_value, 125.5);
        assert_eq!(report.manual_references.len(), 2);
        assert!(report.is_safe.is_none());
    }

    #[test]
    fn test_unknown_risk_level_is_rejected() {
        let result = serde_json::from_str::<SafetyReport>(
            r#"{
                "decision_summary": "Abort operation immediately.",
                "calculated_value": 300.0,
                "unit": "PSI",
                "risk_level": "CRITICAL",
                "manual_references": ["Manual B p.99"]
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_lowercase_risk_level_is_rejected() {
        assert!(serde_json::from_str::<RiskLevel>("\"low\"").is_err());
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"MEDIUM\"").unwrap(),
            RiskLevel::Medium
        );
    }
}
