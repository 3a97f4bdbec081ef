//! Knowledge lookup contract

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Text returned when no passage matches a query
pub const NO_RESULTS: &str = "No relevant manuals found.";

/// Separator between passages in a lookup result
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Reference-text lookup over engineering manuals.
///
/// Returns either formatted passages or [`NO_RESULTS`]. Connectivity
/// failures are reported as errors. Implementations are shared between
/// concurrent workflow runs and must tolerate concurrent calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KnowledgeLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<String, DomainError>;

    /// Number of passages available to search
    async fn passage_count(&self) -> usize;
}
