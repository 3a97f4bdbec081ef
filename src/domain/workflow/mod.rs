//! Workflow domain module
//!
//! The workflow is an explicit finite-state machine:
//!
//! ```text
//! CLASSIFY -> ROUTE -> (RETRIEVE | SIMULATE) -> SYNTHESIZE -> VALIDATE
//! VALIDATE -> APPROVED | CLASSIFY (retry) | EXCEEDED
//! ```
//!
//! Each step produces a [`StepOutput`] that is folded into the run's
//! [`WorkflowState`]. The retry bound lives in [`RetryPolicy`].

mod error;
mod executor;
pub mod graph;
mod policy;
mod stage;
mod state;
mod trace;

pub use error::{CollaboratorCause, WorkflowError};
pub use executor::{
    AuditTrail, RunStatus, SafetyCheck, StepRecord, WorkflowResult, WorkflowRunner,
};
pub use policy::{PassVerdict, RetryPolicy, MAX_SAFETY_RETRIES};
pub use stage::Stage;
pub use state::{StepOutput, WorkflowState};
pub use trace::DiagnosticTrace;
