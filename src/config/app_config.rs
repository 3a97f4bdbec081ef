use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::workflow::MAX_SAFETY_RETRIES;
use crate::domain::RiskLevel;
use crate::infrastructure::observability::ObservabilityConfig;

/// Environment variable consulted when no synthesizer API key is configured
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub synthesizer: SynthesizerConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allow_any: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Engine limits and simulation defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub max_retries: u32,
    /// Overall budget for one run, collaborator calls included
    pub deadline_ms: u64,
    pub default_flow_rate: f64,
    pub default_viscosity: f64,
    /// Highest report risk level that may still be released
    pub max_allowed_risk: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SynthesizerProvider {
    #[default]
    Template,
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    pub provider: SynthesizerProvider,
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    pub manuals_dir: PathBuf,
    pub top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allow_any: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_SAFETY_RETRIES,
            deadline_ms: 60_000,
            default_flow_rate: crate::domain::calculation::DEFAULT_FLOW_RATE,
            default_viscosity: crate::domain::calculation::DEFAULT_VISCOSITY,
            max_allowed_risk: RiskLevel::High,
        }
    }
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            provider: SynthesizerProvider::default(),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            temperature: 0.0,
            timeout_ms: 30_000,
        }
    }
}

impl SynthesizerConfig {
    /// Configured key, falling back to `OPENAI_API_KEY`
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            manuals_dir: PathBuf::from("./data/manuals"),
            top_k: 3,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
