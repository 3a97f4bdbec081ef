//! Query intent classification
//!
//! The classifier is a pure heuristic: it is total over every input string
//! and always resolves to one of the three intents, falling through to
//! [`Intent::Hybrid`] when nothing matches.

use serde::{Deserialize, Serialize};

/// Unit tokens that mark a query as carrying numeric process values
pub const UNIT_TOKENS: &[&str] = &["psi", "m3", "m³", "kpa", "mpa"];

/// Keywords that send a query to the manuals
pub const REFERENCE_KEYWORDS: &[&str] = &["safety", "manual"];

/// Classified category of a field engineer's query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Retrieval,
    Calculation,
    Hybrid,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Retrieval => "RETRIEVAL",
            Intent::Calculation => "CALCULATION",
            Intent::Hybrid => "HYBRID",
        }
    }

    /// Classify a query.
    ///
    /// A digit together with a pressure/volume unit wins over reference
    /// keywords, so "850 psi per the safety manual" is a calculation.
    pub fn classify(query: &str) -> Self {
        let lowered = query.to_lowercase();

        let has_digit = lowered.chars().any(|c| c.is_ascii_digit());
        let has_unit = UNIT_TOKENS.iter().any(|token| lowered.contains(token));

        if has_digit && has_unit {
            return Intent::Calculation;
        }

        if REFERENCE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return Intent::Retrieval;
        }

        Intent::Hybrid
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_and_unit_is_calculation() {
        assert_eq!(
            Intent::classify("Flow is 200 m3 at 850 psi, is this safe?"),
            Intent::Calculation
        );
        assert_eq!(Intent::classify("Line holds 40 PSI"), Intent::Calculation);
        assert_eq!(Intent::classify("Tank at 3 MPa"), Intent::Calculation);
    }

    #[test]
    fn test_calculation_rule_wins_over_keywords() {
        assert_eq!(
            Intent::classify("Is 900 psi within the safety manual limits?"),
            Intent::Calculation
        );
    }

    #[test]
    fn test_unit_without_digit_is_not_calculation() {
        assert_eq!(Intent::classify("What psi should I expect?"), Intent::Hybrid);
        assert_eq!(
            Intent::classify("Which manual covers psi ratings?"),
            Intent::Retrieval
        );
    }

    #[test]
    fn test_digit_without_unit_is_not_calculation() {
        assert_eq!(Intent::classify("Pump 7 is vibrating"), Intent::Hybrid);
    }

    #[test]
    fn test_reference_keywords_are_retrieval() {
        assert_eq!(
            Intent::classify("What is the maximum safe pressure per the manual?"),
            Intent::Retrieval
        );
        assert_eq!(Intent::classify("SAFETY checklist for H2S"), Intent::Retrieval);
    }

    #[test]
    fn test_everything_else_is_hybrid() {
        assert_eq!(Intent::classify(""), Intent::Hybrid);
        assert_eq!(Intent::classify("   "), Intent::Hybrid);
        assert_eq!(Intent::classify("How do I restart the compressor?"), Intent::Hybrid);
        assert_eq!(Intent::classify("¿Qué pasa con la válvula?"), Intent::Hybrid);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let query = "Valve 3 reads 1100 psi";
        assert_eq!(Intent::classify(query), Intent::classify(query));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&Intent::Calculation).unwrap(),
            "\"CALCULATION\""
        );
        assert_eq!(Intent::Hybrid.to_string(), "HYBRID");
    }
}
