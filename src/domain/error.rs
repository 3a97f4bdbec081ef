use thiserror::Error;

/// Errors raised by collaborators and services outside the workflow core
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Audit error: {0}")]
    Audit(String),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn knowledge_base(message: impl Into<String>) -> Self {
        Self::KnowledgeBase(message.into())
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn audit(message: impl Into<String>) -> Self {
        Self::Audit(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("openai", "HTTP 503: overloaded");
        assert_eq!(
            error.to_string(),
            "Provider error: openai - HTTP 503: overloaded"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Query must not be empty");
        assert_eq!(error.to_string(), "Validation error: Query must not be empty");
    }

    #[test]
    fn test_knowledge_base_error() {
        let error = DomainError::knowledge_base("index unreachable");
        assert_eq!(error.to_string(), "Knowledge base error: index unreachable");
    }
}
