//! States of the workflow state machine

use serde::{Deserialize, Serialize};

/// A state of the workflow engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Classify,
    Route,
    Retrieve,
    Simulate,
    Synthesize,
    Validate,
    Approved,
    Exceeded,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Classify,
        Stage::Route,
        Stage::Retrieve,
        Stage::Simulate,
        Stage::Synthesize,
        Stage::Validate,
        Stage::Approved,
        Stage::Exceeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::Route => "route",
            Stage::Retrieve => "retrieve",
            Stage::Simulate => "simulate",
            Stage::Synthesize => "synthesize",
            Stage::Validate => "validate",
            Stage::Approved => "approved",
            Stage::Exceeded => "exceeded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Approved | Stage::Exceeded)
    }

    /// Every state this one may transition to, with the edge label
    pub fn transitions(&self) -> &'static [(Stage, &'static str)] {
        match self {
            Stage::Classify => &[(Stage::Route, "")],
            Stage::Route => &[
                (Stage::Retrieve, "retrieval / hybrid"),
                (Stage::Simulate, "calculation"),
            ],
            Stage::Retrieve => &[(Stage::Synthesize, "")],
            Stage::Simulate => &[(Stage::Synthesize, "")],
            Stage::Synthesize => &[(Stage::Validate, "")],
            Stage::Validate => &[
                (Stage::Approved, "safe"),
                (Stage::Classify, "rejected"),
                (Stage::Exceeded, "retries exhausted"),
            ],
            Stage::Approved | Stage::Exceeded => &[],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
