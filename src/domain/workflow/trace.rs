//! Per-step diagnostic trace

use uuid::Uuid;

use super::stage::Stage;

/// Receives human-readable progress messages tagged by stage.
///
/// Observability only; the engine never reads anything back.
pub trait DiagnosticTrace: Send + Sync {
    fn emit(&self, run_id: Uuid, stage: Stage, message: &str);
}
