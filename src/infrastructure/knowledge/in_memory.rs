//! In-memory manual search for development and small deployments

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::knowledge::{KnowledgeLookup, NO_RESULTS, PASSAGE_SEPARATOR};
use crate::domain::DomainError;

/// Default number of passages returned per lookup
pub const DEFAULT_TOP_K: usize = 3;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "what", "which", "per", "with", "this", "that", "from", "are", "how",
    "does", "should", "can", "our", "its", "into", "about", "when", "where", "why", "who",
];

/// A paragraph of a manual with its citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualPassage {
    pub source: String,
    pub content: String,
}

impl ManualPassage {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }

    fn format(&self) -> String {
        format!("[Source: {}]\n{}", self.source, self.content)
    }
}

/// Keyword-overlap search over manual passages held in memory
#[derive(Debug, Clone)]
pub struct InMemoryKnowledgeBase {
    passages: Arc<RwLock<Vec<ManualPassage>>>,
    top_k: usize,
}

impl InMemoryKnowledgeBase {
    pub fn new(top_k: usize) -> Self {
        Self {
            passages: Arc::new(RwLock::new(Vec::new())),
            top_k: top_k.max(1),
        }
    }

    pub fn with_passages(top_k: usize, passages: Vec<ManualPassage>) -> Self {
        Self {
            passages: Arc::new(RwLock::new(passages)),
            top_k: top_k.max(1),
        }
    }

    pub async fn add_passages(&self, passages: impl IntoIterator<Item = ManualPassage>) {
        self.passages.write().await.extend(passages);
    }
}

impl Default for InMemoryKnowledgeBase {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

#[async_trait]
impl KnowledgeLookup for InMemoryKnowledgeBase {
    async fn lookup(&self, query: &str) -> Result<String, DomainError> {
        let terms = query_terms(query);

        if terms.is_empty() {
            return Ok(NO_RESULTS.to_string());
        }

        let passages = self.passages.read().await;

        let mut scored: Vec<(usize, &ManualPassage)> = passages
            .iter()
            .map(|p| {
                let haystack = p.content.to_lowercase();
                let score = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
                (score, p)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        if scored.is_empty() {
            return Ok(NO_RESULTS.to_string());
        }

        // Stable sort keeps manual order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(self.top_k)
            .map(|(_, p)| p.format())
            .collect::<Vec<_>>()
            .join(PASSAGE_SEPARATOR))
    }

    async fn passage_count(&self) -> usize {
        self.passages.read().await.len()
    }
}

fn query_terms(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 3 && !STOPWORDS.contains(t))
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge_base() -> InMemoryKnowledgeBase {
        InMemoryKnowledgeBase::with_passages(
            2,
            vec![
                ManualPassage::new(
                    "pipeline-operations.md §1",
                    "Maximum safe operating pressure for the export line is 1200 psi.",
                ),
                ManualPassage::new(
                    "pipeline-operations.md §2",
                    "Relief valves must be inspected every 6 months.",
                ),
                ManualPassage::new(
                    "h2s-safety.md §1",
                    "H2S exposure limit is 10 ppm. Evacuate upwind when the safety alarm sounds.",
                ),
            ],
        )
    }

    #[tokio::test]
    async fn test_lookup_returns_best_passages_with_sources() {
        let result = knowledge_base()
            .lookup("What is the maximum safe pressure per the manual?")
            .await
            .unwrap();

        assert!(result.starts_with("[Source: pipeline-operations.md §1]"));
        assert!(result.contains("1200 psi"));
    }

    #[tokio::test]
    async fn test_lookup_respects_top_k() {
        let result = knowledge_base()
            .lookup("safe pressure relief valves safety alarm")
            .await
            .unwrap();

        assert_eq!(result.matches("[Source:").count(), 2);
        assert_eq!(result.matches(PASSAGE_SEPARATOR).count(), 1);
    }

    #[tokio::test]
    async fn test_lookup_without_match() {
        let result = knowledge_base().lookup("compressor lubrication").await.unwrap();
        assert_eq!(result, NO_RESULTS);
    }

    #[tokio::test]
    async fn test_lookup_with_only_stopwords() {
        let result = knowledge_base().lookup("what is the").await.unwrap();
        assert_eq!(result, NO_RESULTS);
    }

    #[tokio::test]
    async fn test_add_passages() {
        let kb = InMemoryKnowledgeBase::default();
        assert_eq!(kb.passage_count().await, 0);

        kb.add_passages(vec![ManualPassage::new("a.md §1", "Compressor lubrication schedule.")])
            .await;

        assert_eq!(kb.passage_count().await, 1);
        assert!(kb.lookup("compressor").await.unwrap().contains("a.md §1"));
    }

    #[test]
    fn test_passage_count() {
        assert_eq!(tokio_test::block_on(knowledge_base().passage_count()), 3);
    }

    #[test]
    fn test_query_terms() {
        assert_eq!(
            query_terms("What is the H2S limit? H2S!"),
            vec!["h2s".to_string(), "limit".to_string()]
        );
    }
}
