//! Safety validation: schema enforcement, PII masking and the release gate

mod gate;
mod outcome;
mod redaction;
mod report;
mod validator;

pub use gate::SafetyGate;
pub use outcome::{RejectionKind, RejectionReason, ValidationOutcome};
pub use redaction::PiiRedactor;
pub use report::{RiskLevel, SafetyReport};
pub use validator::SafetyValidator;
