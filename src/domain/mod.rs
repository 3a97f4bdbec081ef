//! Domain layer - Core business logic and collaborator contracts

pub mod audit;
pub mod calculation;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod safety;
pub mod synthesis;
pub mod workflow;

pub use audit::{AuditRecord, AuditSink, FinalStatus};
pub use calculation::{
    CalculationEngine, CalculationResult, CalculationStatus, FlowParameters, ParameterExtractor,
};
pub use error::DomainError;
pub use intent::Intent;
pub use knowledge::KnowledgeLookup;
pub use safety::{
    PiiRedactor, RejectionKind, RejectionReason, RiskLevel, SafetyGate, SafetyReport,
    SafetyValidator, ValidationOutcome,
};
pub use synthesis::{DraftSynthesizer, SynthesisRequest};
pub use workflow::{
    AuditTrail, DiagnosticTrace, RetryPolicy, RunStatus, SafetyCheck, Stage, StepRecord,
    WorkflowError, WorkflowResult, WorkflowRunner, WorkflowState,
};
