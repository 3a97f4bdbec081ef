//! Audit sink implementations

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{AuditRecord, AuditSink, DomainError};

/// Writes each record as one JSON line on the `audit` tracing target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, record: AuditRecord) -> Result<(), DomainError> {
        let line = serde_json::to_string(&record)
            .map_err(|e| DomainError::audit(format!("Failed to serialize record: {}", e)))?;

        info!(
            target: "audit",
            audit_id = %record.audit_id,
            final_status = %record.final_status,
            "{}",
            line
        );

        Ok(())
    }
}

/// Keeps records in memory, for tests and local inspection
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<AuditRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn record(&self, record: AuditRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FinalStatus;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_in_memory_sink_keeps_order() {
        let sink = InMemoryAuditSink::new();
        assert!(sink.is_empty().await);

        let first = AuditRecord::new(Uuid::new_v4(), "engineer_01", "q1", FinalStatus::Success);
        let second =
            AuditRecord::new(Uuid::new_v4(), "engineer_02", "q2", FinalStatus::BlockedBySafety);

        sink.record(first.clone()).await.unwrap();
        sink.record(second.clone()).await.unwrap();

        assert_eq!(sink.len().await, 2);
        assert_eq!(sink.records().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_tracing_sink_accepts_records() {
        let record =
            AuditRecord::new(Uuid::new_v4(), "engineer_01", "q", FinalStatus::InternalError);
        assert!(TracingAuditSink::new().record(record).await.is_ok());
    }
}
