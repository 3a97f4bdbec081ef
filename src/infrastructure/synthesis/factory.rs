use std::sync::Arc;
use std::time::Duration;

use super::{OpenAiSynthesizer, TemplateSynthesizer};
use crate::config::{SynthesizerConfig, SynthesizerProvider};
use crate::domain::{DomainError, DraftSynthesizer};
use crate::infrastructure::llm::HttpClient;

/// Factory for creating draft synthesizers
#[derive(Debug)]
pub struct SynthesizerFactory;

impl SynthesizerFactory {
    /// Create a synthesizer from configuration
    pub fn create(config: &SynthesizerConfig) -> Result<Arc<dyn DraftSynthesizer>, DomainError> {
        match config.provider {
            SynthesizerProvider::Template => Ok(Arc::new(TemplateSynthesizer::new())),

            SynthesizerProvider::OpenAi => {
                let api_key = config.resolved_api_key().ok_or_else(|| {
                    DomainError::configuration(
                        "OpenAI synthesizer requires synthesizer.api_key or OPENAI_API_KEY",
                    )
                })?;

                let client = HttpClient::with_timeout(Duration::from_millis(config.timeout_ms))?;

                let synthesizer =
                    OpenAiSynthesizer::with_base_url(client, api_key, &config.base_url)
                        .with_model(&config.model)
                        .with_temperature(config.temperature);

                Ok(Arc::new(synthesizer))
            }
        }
    }
}
