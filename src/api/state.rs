//! Application state for shared services

use std::sync::Arc;

use crate::domain::KnowledgeLookup;
use crate::infrastructure::services::QueryServiceTrait;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<dyn QueryServiceTrait>,
    pub knowledge: Arc<dyn KnowledgeLookup>,
    /// Name of the configured draft synthesizer, reported by readiness
    pub synthesizer_name: &'static str,
}

impl AppState {
    pub fn new(
        query_service: Arc<dyn QueryServiceTrait>,
        knowledge: Arc<dyn KnowledgeLookup>,
        synthesizer_name: &'static str,
    ) -> Self {
        Self {
            query_service,
            knowledge,
            synthesizer_name,
        }
    }
}
