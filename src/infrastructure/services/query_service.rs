//! Query service: runs the workflow and writes the governance record

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    AuditRecord, AuditSink, DomainError, FinalStatus, PiiRedactor, RunStatus, WorkflowResult,
    WorkflowRunner,
};
use crate::infrastructure::observability::record_workflow_run;

#[cfg(test)]
use mockall::automock;

/// Answer returned to the requester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReceipt {
    pub status: RunStatus,
    /// Approved response, or the rejection reason when blocked
    pub response: String,
    pub audit_id: Uuid,
}

/// Trait for the query service (for dynamic dispatch in AppState)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryServiceTrait: Send + Sync + Debug {
    /// Run one query on behalf of a requester.
    ///
    /// Workflow failures come back as [`DomainError::Internal`] after the
    /// audit record has been written.
    async fn handle(&self, query: &str, requester_id: &str) -> Result<QueryReceipt, DomainError>;
}

/// Query service implementation
pub struct QueryService {
    runner: Arc<dyn WorkflowRunner>,
    audit: Arc<dyn AuditSink>,
    redactor: PiiRedactor,
}

impl Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService").finish_non_exhaustive()
    }
}

impl QueryService {
    pub fn new(runner: Arc<dyn WorkflowRunner>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            runner,
            audit,
            redactor: PiiRedactor::new(),
        }
    }

    async fn write_audit(&self, record: AuditRecord) {
        let audit_id = record.audit_id;

        if let Err(e) = self.audit.record(record).await {
            warn!(%audit_id, error = %e, "Failed to write audit record");
        }
    }
}

fn final_status(result: &WorkflowResult) -> FinalStatus {
    match result.status() {
        RunStatus::Success => FinalStatus::Success,
        RunStatus::BlockedBySafety => FinalStatus::BlockedBySafety,
    }
}

#[async_trait]
impl QueryServiceTrait for QueryService {
    #[instrument(skip(self, query))]
    async fn handle(&self, query: &str, requester_id: &str) -> Result<QueryReceipt, DomainError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(DomainError::validation("query must not be empty"));
        }

        let audit_id = Uuid::new_v4();
        let started = Instant::now();
        let outcome = self.runner.run(query).await;
        let masked_query = self.redactor.redact(query);

        match outcome {
            Ok(result) => {
                let status = final_status(&result);
                let trail = result.audit_trail();

                record_workflow_run(status.as_str(), trail.intent.as_str(), started.elapsed());
                info!(
                    %audit_id,
                    status = %status,
                    intent = %trail.intent,
                    retries = trail.retry_count,
                    "Query completed"
                );

                let mut record = AuditRecord::new(audit_id, requester_id, masked_query, status)
                    .with_trail(trail);

                if let WorkflowResult::Blocked {
                    reason, last_draft, ..
                } = &result
                {
                    record = record.with_blocked_draft(
                        self.redactor.redact(last_draft),
                        self.redactor.redact(reason),
                    );
                }

                self.write_audit(record).await;

                Ok(QueryReceipt {
                    status: result.status(),
                    response: result.message().to_string(),
                    audit_id,
                })
            }
            Err(e) => {
                let status = FinalStatus::InternalError;

                record_workflow_run(status.as_str(), "UNKNOWN", started.elapsed());
                error!(%audit_id, stage = %e.stage(), error = %e, "Workflow run failed");

                let record = AuditRecord::new(audit_id, requester_id, masked_query, status);
                self.write_audit(record).await;

                Err(DomainError::internal(e.to_string()))
            }
        }
    }
}
