//! Draft synthesizer implementations

mod factory;
mod openai;
mod template;

pub use factory::SynthesizerFactory;
pub use openai::{OpenAiSynthesizer, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL};
pub use template::TemplateSynthesizer;
