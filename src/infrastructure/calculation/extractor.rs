//! Parameter extraction for the simulate step

use crate::domain::calculation::{FlowParameters, ParameterExtractor};
use crate::domain::DomainError;

/// Ignores the query text and yields configured default parameters
#[derive(Debug, Clone, Copy)]
pub struct DefaultFlowExtractor {
    params: FlowParameters,
}

impl DefaultFlowExtractor {
    pub fn new(params: FlowParameters) -> Self {
        Self { params }
    }
}

impl Default for DefaultFlowExtractor {
    fn default() -> Self {
        Self::new(FlowParameters::default())
    }
}

impl ParameterExtractor for DefaultFlowExtractor {
    fn extract(&self, _query: &str) -> Result<FlowParameters, DomainError> {
        Ok(self.params)
    }
}
