//! Loads engineering manuals from a directory of text files

use std::path::Path;

use tracing::{debug, warn};

use super::in_memory::ManualPassage;
use crate::domain::DomainError;

const MANUAL_EXTENSIONS: &[&str] = &["md", "txt"];

/// Split a manual into blank-line separated passages tagged `name §n`
pub fn split_passages(source: &str, text: &str) -> Vec<ManualPassage> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .enumerate()
        .map(|(i, p)| ManualPassage::new(format!("{} §{}", source, i + 1), p))
        .collect()
}

/// Read every `.md`/`.txt` file directly under `dir`.
///
/// A missing directory yields no passages. Files are visited in name order so
/// citations are stable between restarts.
pub async fn load_manuals(dir: &Path) -> Result<Vec<ManualPassage>, DomainError> {
    if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
        warn!(dir = %dir.display(), "Manuals directory not found, knowledge base is empty");
        return Ok(Vec::new());
    }

    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        DomainError::knowledge_base(format!("Failed to read {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DomainError::knowledge_base(e.to_string()))?
    {
        let path = entry.path();
        let is_manual = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| MANUAL_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if is_manual && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut passages = Vec::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::knowledge_base(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let parsed = split_passages(&name, &text);
        debug!(manual = %name, passages = parsed.len(), "Loaded manual");
        passages.extend(parsed);
    }

    Ok(passages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_passages() {
        let passages = split_passages(
            "valves.md",
            "# Valves\r\n\r\nInspect every 6 months.\n\n\n\n  Replace seals yearly.  \n",
        );

        assert_eq!(passages.len(), 3);
        assert_eq!(passages[0], ManualPassage::new("valves.md §1", "# Valves"));
        assert_eq!(passages[2].source, "valves.md §3");
        assert_eq!(passages[2].content, "Replace seals yearly.");
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_passages("empty.md", "  \n\n ").is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let passages = load_manuals(Path::new("/nonexistent/manuals/dir")).await.unwrap();
        assert!(passages.is_empty());
    }

    #[tokio::test]
    async fn test_load_manuals_from_directory() {
        let dir = std::env::temp_dir().join(format!("manuals-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("b.md"), "Second manual.").unwrap();
        std::fs::write(dir.join("a.txt"), "First.\n\nStill first.").unwrap();
        std::fs::write(dir.join("image.png"), "ignored").unwrap();

        let passages = load_manuals(&dir).await.unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let sources: Vec<_> = passages.iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, vec!["a.txt §1", "a.txt §2", "b.md §1"]);
    }
}
