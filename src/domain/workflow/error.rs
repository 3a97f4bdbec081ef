//! Workflow error types

use thiserror::Error;

use super::stage::Stage;

/// Why a collaborator call failed
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollaboratorCause {
    #[error("timed out after {0}ms")]
    Timeout(u64),

    #[error("{0}")]
    Error(String),
}

/// Errors that abort a workflow run.
///
/// Safety rejections are not errors: they drive the retry loop and end in
/// a `Blocked` result. Classification never fails; unmatched queries fall
/// through to the hybrid intent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Collaborator failure in '{stage}': {cause}")]
    CollaboratorFailure { stage: Stage, cause: CollaboratorCause },
}

impl WorkflowError {
    pub fn collaborator(stage: Stage, message: impl Into<String>) -> Self {
        Self::CollaboratorFailure {
            stage,
            cause: CollaboratorCause::Error(message.into()),
        }
    }

    pub fn timeout(stage: Stage, deadline_ms: u64) -> Self {
        Self::CollaboratorFailure {
            stage,
            cause: CollaboratorCause::Timeout(deadline_ms),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            WorkflowError::CollaboratorFailure { stage, .. } => *stage,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            WorkflowError::CollaboratorFailure {
                cause: CollaboratorCause::Timeout(_),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorkflowError::collaborator(Stage::Retrieve, "connection refused");
        assert_eq!(
            err.to_string(),
            "Collaborator failure in 'retrieve': connection refused"
        );

        let err = WorkflowError::timeout(Stage::Synthesize, 5000);
        assert_eq!(
            err.to_string(),
            "Collaborator failure in 'synthesize': timed out after 5000ms"
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = WorkflowError::timeout(Stage::Synthesize, 10);
        assert_eq!(err.stage(), Stage::Synthesize);
        assert!(err.is_timeout());
        assert!(!WorkflowError::collaborator(Stage::Simulate, "bad input").is_timeout());
    }
}
