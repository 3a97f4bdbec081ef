//! Workflow infrastructure implementations

mod engine;

pub use engine::{WorkflowEngine, WorkflowEngineConfig};
