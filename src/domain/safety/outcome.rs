//! Validation outcomes and structured rejection reasons

use serde::{Deserialize, Serialize};

use super::report::SafetyReport;

/// Machine-readable rejection category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The draft is not parseable structured data
    ParseFailure,
    /// The draft parsed but does not match the report schema
    SchemaViolation,
    /// The report is valid but the safety gate refused it
    PolicyViolation,
}

impl RejectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::ParseFailure => "parse_failure",
            RejectionKind::SchemaViolation => "schema_violation",
            RejectionKind::PolicyViolation => "policy_violation",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a draft was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReason {
    pub kind: RejectionKind,
    pub detail: String,
}

impl RejectionReason {
    pub fn parse_failure(detail: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::ParseFailure,
            detail: detail.into(),
        }
    }

    pub fn schema_violation(detail: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::SchemaViolation,
            detail: detail.into(),
        }
    }

    pub fn policy_violation(detail: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::PolicyViolation,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Safety {}: {}", self.kind.as_str().replace('_', " "), self.detail)
    }
}

/// Result of structural validation of a draft
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Approved { data: SafetyReport },
    Rejected { reason: RejectionReason },
}

impl ValidationOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, ValidationOutcome::Approved { .. })
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            ValidationOutcome::Approved { .. } => None,
            ValidationOutcome::Rejected { reason } => Some(reason),
        }
    }
}
