//! Governance audit records, written once per run

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::intent::Intent;
use crate::domain::workflow::{AuditTrail, SafetyCheck, StepRecord};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Terminal status of a request as seen by governance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalStatus {
    Success,
    BlockedBySafety,
    InternalError,
}

impl FinalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalStatus::Success => "SUCCESS",
            FinalStatus::BlockedBySafety => "BLOCKED_BY_SAFETY",
            FinalStatus::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One governance entry per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub audit_id: Uuid,
    pub requester_id: String,
    /// Query text after PII masking
    pub query: String,
    pub final_status: FinalStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
    /// Redacted draft the final pass rejected; blocked runs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_draft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_checks: Vec<SafetyCheck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepRecord>,
}

impl AuditRecord {
    pub fn new(
        audit_id: Uuid,
        requester_id: impl Into<String>,
        query: impl Into<String>,
        final_status: FinalStatus,
    ) -> Self {
        Self {
            audit_id,
            requester_id: requester_id.into(),
            query: query.into(),
            final_status,
            timestamp: Utc::now(),
            intent: None,
            retry_count: None,
            last_draft: None,
            safety_feedback: None,
            safety_checks: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Copy intent, retries, per-pass safety checks and steps from a run
    pub fn with_trail(mut self, trail: &AuditTrail) -> Self {
        self.intent = Some(trail.intent);
        self.retry_count = Some(trail.retry_count);
        self.safety_checks = trail.safety_checks.clone();
        self.steps = trail.steps.clone();
        self
    }

    pub fn with_blocked_draft(
        mut self,
        last_draft: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Self {
        self.last_draft = Some(last_draft.into());
        self.safety_feedback = Some(feedback.into());
        self
    }
}

/// Write-only sink for audit records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, record: AuditRecord) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::Stage;

    fn blocked_trail() -> AuditTrail {
        AuditTrail {
            intent: Intent::Hybrid,
            retry_count: 2,
            steps: vec![StepRecord::new(Stage::Validate, 1, "Draft rejected on pass 1", 0)],
            safety_checks: vec![SafetyCheck::rejected(1, "prose", "Safety parse failure")],
            execution_time_ms: 3,
        }
    }

    #[test]
    fn test_record_serialization() {
        let record = AuditRecord::new(
            Uuid::new_v4(),
            "engineer_01",
            "Check valve 3",
            FinalStatus::BlockedBySafety,
        )
        .with_trail(&blocked_trail())
        .with_blocked_draft("prose", "Safety parse failure");

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["final_status"], "BLOCKED_BY_SAFETY");
        assert_eq!(json["requester_id"], "engineer_01");
        assert_eq!(json["intent"], "HYBRID");
        assert_eq!(json["retry_count"], 2);
        assert_eq!(json["last_draft"], "prose");
        assert_eq!(json["safety_feedback"], "Safety parse failure");
        assert_eq!(json["safety_checks"][0]["is_safe"], false);
        assert_eq!(json["steps"][0]["stage"], serde_json::to_value(Stage::Validate).unwrap());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_record_without_run_details() {
        let record =
            AuditRecord::new(Uuid::new_v4(), "engineer_01", "q", FinalStatus::InternalError);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"final_status\":\"INTERNAL_ERROR\""));
        assert!(!json.contains("intent"));
        assert!(!json.contains("last_draft"));
        assert!(!json.contains("safety_checks"));
    }
}
