//! Structural validation of synthesized drafts

use serde_json::Value;

use super::outcome::{RejectionReason, ValidationOutcome};
use super::redaction::PiiRedactor;
use super::report::SafetyReport;

/// Validates drafts against the [`SafetyReport`] schema.
///
/// Validation is purely structural: a well-formed report with risk `HIGH`
/// is still approved here. Whether the run may finish is decided by
/// [`super::SafetyGate`] from the fields of the approved report.
#[derive(Debug, Clone, Default)]
pub struct SafetyValidator {
    redactor: PiiRedactor,
}

impl SafetyValidator {
    pub fn new() -> Self {
        Self {
            redactor: PiiRedactor::new(),
        }
    }

    /// Mask PII in a draft regardless of whether it validates
    pub fn redact(&self, draft: &str) -> String {
        self.redactor.redact(draft)
    }

    /// Validate a draft. The approved report carries redacted text.
    pub fn validate(&self, draft: &str) -> ValidationOutcome {
        let sanitized = self.redact(draft);
        let body = strip_code_fence(&sanitized);

        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                return ValidationOutcome::Rejected {
                    reason: RejectionReason::parse_failure(format!(
                        "draft is not valid JSON ({})",
                        e
                    )),
                };
            }
        };

        if !value.is_object() {
            return ValidationOutcome::Rejected {
                reason: RejectionReason::schema_violation(format!(
                    "expected a JSON object, found {}",
                    json_type_name(&value)
                )),
            };
        }

        let report: SafetyReport = match serde_json::from_value(value) {
            Ok(report) => report,
            Err(e) => {
                return ValidationOutcome::Rejected {
                    reason: RejectionReason::schema_violation(e.to_string()),
                };
            }
        };

        if let Err(reason) = check_field_constraints(&report) {
            return ValidationOutcome::Rejected { reason };
        }

        ValidationOutcome::Approved { data: report }
    }
}

fn check_field_constraints(report: &SafetyReport) -> Result<(), RejectionReason> {
    if report.decision_summary.trim().is_empty() {
        return Err(RejectionReason::schema_violation(
            "decision_summary must not be empty",
        ));
    }

    if !report.calculated_value.is_finite() {
        return Err(RejectionReason::schema_violation(
            "calculated_value must be a finite number",
        ));
    }

    Ok(())
}

/// Unwrap a Markdown code fence (```json ... ```) if the whole draft is one
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening line
    match inner.find('\n') {
        Some(idx) => inner[idx + 1..].trim(),
        None => inner.trim(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
