//! Diagnostic trace backed by `tracing`

use uuid::Uuid;

use crate::domain::{DiagnosticTrace, Stage};

/// Emits one INFO event per step message, tagged with `run_id` and `stage`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticTrace for TracingDiagnostics {
    fn emit(&self, run_id: Uuid, stage: Stage, message: &str) {
        tracing::info!(target: "workflow", %run_id, stage = stage.as_str(), "{}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticTrace for NoopDiagnostics {
    fn emit(&self, _run_id: Uuid, _stage: Stage, _message: &str) {}
}
