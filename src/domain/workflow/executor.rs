//! Workflow runner trait and result types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::WorkflowError;
use super::stage::Stage;
use crate::domain::intent::Intent;
use crate::domain::safety::SafetyReport;

/// Terminal status of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Success,
    BlockedBySafety,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::BlockedBySafety => "BLOCKED_BY_SAFETY",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of a single executed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub stage: Stage,
    /// Validation pass this step belongs to, starting at 1
    pub pass: u32,
    pub detail: String,
    pub elapsed_ms: u64,
}

impl StepRecord {
    pub fn new(stage: Stage, pass: u32, detail: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            stage,
            pass,
            detail: detail.into(),
            elapsed_ms,
        }
    }
}

/// Verdict of one validation pass, with the redacted draft it judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCheck {
    pub pass: u32,
    pub is_safe: bool,
    pub draft: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl SafetyCheck {
    pub fn approved(pass: u32, draft: impl Into<String>) -> Self {
        Self {
            pass,
            is_safe: true,
            draft: draft.into(),
            feedback: None,
        }
    }

    pub fn rejected(pass: u32, draft: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            pass,
            is_safe: false,
            draft: draft.into(),
            feedback: Some(feedback.into()),
        }
    }
}

/// Step-by-step account of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrail {
    pub intent: Intent,
    pub retry_count: u32,
    pub steps: Vec<StepRecord>,
    /// One entry per validation pass, in order
    pub safety_checks: Vec<SafetyCheck>,
    pub execution_time_ms: u64,
}

impl AuditTrail {
    /// Number of steps recorded for a stage
    pub fn count(&self, stage: Stage) -> usize {
        self.steps.iter().filter(|s| s.stage == stage).count()
    }

    /// Number of validation passes performed
    pub fn passes(&self) -> usize {
        self.count(Stage::Validate)
    }
}

/// Terminal result of a workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The final safety check passed
    Success {
        response: String,
        report: SafetyReport,
        audit_trail: AuditTrail,
    },
    /// Safety failed and the retry bound was exhausted
    Blocked {
        reason: String,
        last_draft: String,
        audit_trail: AuditTrail,
    },
}

impl WorkflowResult {
    pub fn status(&self) -> RunStatus {
        match self {
            WorkflowResult::Success { .. } => RunStatus::Success,
            WorkflowResult::Blocked { .. } => RunStatus::BlockedBySafety,
        }
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        match self {
            WorkflowResult::Success { audit_trail, .. }
            | WorkflowResult::Blocked { audit_trail, .. } => audit_trail,
        }
    }

    /// Text returned to the caller: the response, or the rejection reason
    pub fn message(&self) -> &str {
        match self {
            WorkflowResult::Success { response, .. } => response,
            WorkflowResult::Blocked { reason, .. } => reason,
        }
    }
}

/// Runs a query through the workflow.
///
/// Collaborator failures surface as [`WorkflowError`]; safety rejections
/// never do.
#[async_trait]
pub trait WorkflowRunner: Send + Sync {
    async fn run(&self, query: &str) -> Result<WorkflowResult, WorkflowError>;
}
