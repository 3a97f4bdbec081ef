//! Infrastructure layer - External service implementations

pub mod audit;
pub mod calculation;
pub mod diagnostics;
pub mod knowledge;
pub mod llm;
pub mod logging;
pub mod observability;
pub mod services;
pub mod synthesis;
pub mod workflow;
