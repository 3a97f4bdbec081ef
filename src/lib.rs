//! Industrial Agent Orchestrator
//!
//! Answers field-engineer questions through a safety-gated workflow:
//! - Intent classification and routing to manuals, physics calculation or both
//! - Draft synthesis validated against a structured safety report
//! - Bounded re-synthesis when the safety check rejects a draft
//! - PII redaction and an audit record for every run

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::FlowParameters;
use infrastructure::{
    audit::TracingAuditSink,
    calculation::{DefaultFlowExtractor, PressureFlowCalculator},
    knowledge::{load_manuals, InMemoryKnowledgeBase},
    services::QueryService,
    synthesis::SynthesizerFactory,
    workflow::{WorkflowEngine, WorkflowEngineConfig},
};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let passages = load_manuals(&config.knowledge.manuals_dir).await?;
    info!(
        "Loaded {} manual passages from {}",
        passages.len(),
        config.knowledge.manuals_dir.display()
    );
    let knowledge = Arc::new(InMemoryKnowledgeBase::with_passages(
        config.knowledge.top_k,
        passages,
    ));

    let synthesizer = SynthesizerFactory::create(&config.synthesizer)?;
    let synthesizer_name = synthesizer.name();
    info!("Draft synthesizer: {}", synthesizer_name);

    let extractor = DefaultFlowExtractor::new(
        FlowParameters::new(config.workflow.default_flow_rate)
            .with_viscosity(config.workflow.default_viscosity),
    );

    let engine = WorkflowEngine::new(
        knowledge.clone(),
        Arc::new(PressureFlowCalculator::new()),
        Arc::new(extractor),
        synthesizer,
    )
    .with_config(WorkflowEngineConfig::from(&config.workflow));

    let query_service = Arc::new(QueryService::new(
        Arc::new(engine),
        Arc::new(TracingAuditSink::new()),
    ));

    Ok(AppState::new(query_service, knowledge, synthesizer_name))
}
