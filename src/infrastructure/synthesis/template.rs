//! Offline synthesizer that renders a report from tool outputs

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::calculation::{CalculationResult, CalculationStatus};
use crate::domain::knowledge::NO_RESULTS;
use crate::domain::{DomainError, DraftSynthesizer, RiskLevel, SafetyReport, SynthesisRequest};

static SOURCE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Source: ([^\]]+)\]").expect("source tag regex"));

const PRESSURE_UNIT: &str = "PSI";

/// Deterministic synthesizer: identical inputs produce identical drafts
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn build_report(request: &SynthesisRequest<'_>) -> SafetyReport {
        let references = request
            .retrieved_context
            .map(extract_references)
            .unwrap_or_default();

        let mut summary = Vec::new();

        let (value, risk_level, is_safe) = match request.calculation {
            Some(calc) => {
                summary.push(describe_calculation(calc));
                let risk = risk_for(calc.status);
                (calc.estimated_pressure, risk, Some(calc.status != CalculationStatus::Error))
            }
            None => (0.0, RiskLevel::Low, None),
        };

        if !references.is_empty() {
            summary.push(format!("Follow the procedure in {}.", references.join(", ")));
        } else if request.retrieved_context.is_some() {
            summary.push(
                "No manual section covers this question; consult the site supervisor.".to_string(),
            );
        }

        if summary.is_empty() {
            summary.push(
                "No manual guidance or simulation data is available; escalate before proceeding."
                    .to_string(),
            );
        }

        SafetyReport {
            decision_summary: summary.join(" "),
            calculated_value: value,
            unit: PRESSURE_UNIT.to_string(),
            risk_level,
            manual_references: references,
            is_safe,
        }
    }
}

#[async_trait]
impl DraftSynthesizer for TemplateSynthesizer {
    async fn synthesize(&self, request: SynthesisRequest<'_>) -> Result<String, DomainError> {
        let report = Self::build_report(&request);

        serde_json::to_string(&report)
            .map_err(|e| DomainError::internal(format!("Failed to render report: {}", e)))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

fn risk_for(status: CalculationStatus) -> RiskLevel {
    match status {
        CalculationStatus::Nominal => RiskLevel::Low,
        CalculationStatus::HighPressureWarning => RiskLevel::High,
        CalculationStatus::Error => RiskLevel::Medium,
    }
}

fn describe_calculation(calc: &CalculationResult) -> String {
    let mut text = format!(
        "Estimated line pressure is {:.2} {} at {} m3/h ({}).",
        calc.estimated_pressure, PRESSURE_UNIT, calc.input_flow_rate, calc.status
    );

    if let Some(warning) = &calc.warning {
        text.push(' ');
        text.push_str(warning);
    }

    text
}

fn extract_references(context: &str) -> Vec<String> {
    if context.trim() == NO_RESULTS {
        return Vec::new();
    }

    let mut references: Vec<String> = Vec::new();
    for capture in SOURCE_TAG.captures_iter(context) {
        let source = capture[1].trim().to_string();
        if !references.contains(&source) {
            references.push(source);
        }
    }
    references
}
