mod app_config;

pub use app_config::{
    AppConfig, KnowledgeConfig, LogFormat, LoggingConfig, ServerConfig, SynthesizerConfig,
    SynthesizerProvider, WorkflowConfig, OPENAI_API_KEY_ENV,
};
