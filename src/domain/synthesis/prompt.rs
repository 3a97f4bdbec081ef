use super::SynthesisRequest;

/// System prompt describing the structured safety report the draft must follow
pub const SYSTEM_PROMPT: &str = "You are an Engineering Assistant for field engineers. \
Answer ONLY with a single JSON object with exactly these fields: \
\"decision_summary\" (string, the core recommendation), \
\"calculated_value\" (number, the numeric result from the engineering tool or 0), \
\"unit\" (string, e.g. PSI), \
\"risk_level\" (one of \"LOW\", \"MEDIUM\", \"HIGH\"), \
\"manual_references\" (array of strings citing manual sections), \
\"is_safe\" (boolean, whether proceeding is safe). \
Never include personal names, phone numbers or e-mail addresses.";

const NOT_AVAILABLE: &str = "N/A";

/// Render the user prompt for one synthesis pass
pub fn render_user_prompt(request: &SynthesisRequest<'_>) -> String {
    let calculation = request
        .calculation
        .and_then(|c| serde_json::to_string(c).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut prompt = format!(
        "Answer the user query based on the following data.\n\n\
         User Query: {}\n\
         Retrieved Manual Context: {}\n\
         Simulation Result: {}\n\n\
         Formulate a clear recommendation.",
        request.query,
        request.retrieved_context.unwrap_or(NOT_AVAILABLE),
        calculation,
    );

    if let Some(feedback) = request.feedback {
        prompt.push_str(&format!(
            "\n\nYour previous answer was rejected by the safety validator: {}\n\
             Correct the answer so it satisfies the required JSON schema.",
            feedback
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::{CalculationResult, CalculationStatus};

    #[test]
    fn test_prompt_without_tool_output() {
        let prompt = render_user_prompt(&SynthesisRequest::new("How do I bleed the line?"));

        assert!(prompt.contains("User Query: How do I bleed the line?"));
        assert!(prompt.contains("Retrieved Manual Context: N/A"));
        assert!(prompt.contains("Simulation Result: N/A"));
        assert!(!prompt.contains("rejected"));
    }

    #[test]
    fn test_prompt_with_calculation_and_feedback() {
        let calc = CalculationResult {
            input_flow_rate: 200.0,
            estimated_pressure: 1000.62,
            status: CalculationStatus::Nominal,
            warning: None,
        };
        let request = SynthesisRequest::new("Flow is 200 m3")
            .with_calculation(Some(&calc))
            .with_feedback(Some("parse failure: expected value"));

        let prompt = render_user_prompt(&request);

        assert!(prompt.contains("\"estimated_pressure\":1000.62"));
        assert!(prompt.contains("rejected by the safety validator: parse failure"));
    }

    #[test]
    fn test_system_prompt_lists_schema_fields() {
        for field in [
            "decision_summary",
            "calculated_value",
            "unit",
            "risk_level",
            "manual_references",
        ] {
            assert!(SYSTEM_PROMPT.contains(field), "missing {field}");
        }
    }
}
