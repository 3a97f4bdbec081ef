//! PII masking applied to drafts and queries before they are stored or logged

use once_cell::sync::Lazy;
use regex::Regex;

struct MaskRule {
    pattern: Regex,
    mask: &'static str,
}

impl MaskRule {
    fn new(pattern: &str, mask: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("PII mask pattern must compile"),
            mask,
        }
    }
}

// Order matters: SSNs would otherwise be caught by the phone rule.
static RULES: Lazy<Vec<MaskRule>> = Lazy::new(|| {
    vec![
        MaskRule::new(
            r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b",
            "<EMAIL>",
        ),
        MaskRule::new(r"\b\d{3}-\d{2}-\d{4}\b", "<SSN>"),
        MaskRule::new(
            r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\b\d{3})[\s.-]\d{3}[\s.-]\d{4}\b",
            "<PHONE>",
        ),
        MaskRule::new(
            r"\b(?:Mr|Mrs|Ms|Dr)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?",
            "<PERSON>",
        ),
        MaskRule::new(
            r"(?i:\b(call|contact|ask|notify|phone|email|page|text)\s+)[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?",
            "${1} <PERSON>",
        ),
    ]
});

/// Mask personally identifiable content in free text.
///
/// Masks carry no JSON-significant characters, so a draft that was valid
/// JSON before redaction stays valid afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiiRedactor;

impl PiiRedactor {
    pub fn new() -> Self {
        Self
    }

    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();

        for rule in RULES.iter() {
            redacted = rule.pattern.replace_all(&redacted, rule.mask).into_owned();
        }

        redacted
    }
}
