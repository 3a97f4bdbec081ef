//! Draft synthesis contract

mod prompt;

use async_trait::async_trait;

use crate::domain::calculation::CalculationResult;
use crate::domain::DomainError;

pub use prompt::{render_user_prompt, SYSTEM_PROMPT};

/// Everything the synthesizer sees for one pass
#[derive(Debug, Clone, Copy)]
pub struct SynthesisRequest<'a> {
    pub query: &'a str,
    pub retrieved_context: Option<&'a str>,
    pub calculation: Option<&'a CalculationResult>,
    /// Safety feedback from the previous rejected pass
    pub feedback: Option<&'a str>,
}

impl<'a> SynthesisRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            retrieved_context: None,
            calculation: None,
            feedback: None,
        }
    }

    pub fn with_context(mut self, context: Option<&'a str>) -> Self {
        self.retrieved_context = context;
        self
    }

    pub fn with_calculation(mut self, calculation: Option<&'a CalculationResult>) -> Self {
        self.calculation = calculation;
        self
    }

    pub fn with_feedback(mut self, feedback: Option<&'a str>) -> Self {
        self.feedback = feedback;
        self
    }
}

/// Produces candidate answer text. May be non-deterministic.
#[async_trait]
pub trait DraftSynthesizer: Send + Sync {
    async fn synthesize(&self, request: SynthesisRequest<'_>) -> Result<String, DomainError>;

    fn name(&self) -> &'static str;
}
