//! Per-run workflow state and its step-by-step transitions

use crate::domain::calculation::CalculationResult;
use crate::domain::intent::Intent;
use crate::domain::safety::SafetyReport;

/// Output of one step, folded into the state by [`WorkflowState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    Classified(Intent),
    Retrieved(String),
    Simulated(CalculationResult),
    Drafted(String),
    Validated {
        is_safe: bool,
        feedback: String,
        report: Option<SafetyReport>,
    },
    RetryScheduled,
}

/// The record threaded through every step of one run.
///
/// Created once per query and owned exclusively by that run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    query: String,
    intent: Option<Intent>,
    retrieved_context: Option<String>,
    calculation_result: Option<CalculationResult>,
    draft_response: String,
    is_safe: bool,
    safety_feedback: String,
    report: Option<SafetyReport>,
    retry_count: u32,
}

impl WorkflowState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            intent: None,
            retrieved_context: None,
            calculation_result: None,
            draft_response: String::new(),
            is_safe: false,
            safety_feedback: String::new(),
            report: None,
            retry_count: 0,
        }
    }

    /// Fold a step output into the state
    pub fn apply(mut self, output: StepOutput) -> Self {
        match output {
            StepOutput::Classified(intent) => {
                // Decided once per run; later classifications never override it
                self.intent.get_or_insert(intent);
            }
            StepOutput::Retrieved(context) => {
                self.retrieved_context = Some(context);
            }
            StepOutput::Simulated(result) => {
                self.calculation_result = Some(result);
            }
            StepOutput::Drafted(draft) => {
                self.draft_response = draft;
                self.is_safe = false;
                self.report = None;
            }
            StepOutput::Validated {
                is_safe,
                feedback,
                report,
            } => {
                self.is_safe = is_safe;
                self.safety_feedback = feedback;
                self.report = report;
            }
            StepOutput::RetryScheduled => {
                self.retry_count += 1;
            }
        }

        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    pub fn retrieved_context(&self) -> Option<&str> {
        self.retrieved_context.as_deref()
    }

    pub fn calculation_result(&self) -> Option<&CalculationResult> {
        self.calculation_result.as_ref()
    }

    pub fn draft_response(&self) -> &str {
        &self.draft_response
    }

    pub fn is_safe(&self) -> bool {
        self.is_safe
    }

    pub fn safety_feedback(&self) -> &str {
        &self.safety_feedback
    }

    /// Feedback to hand to the synthesizer, present only after a rejection
    pub fn pending_feedback(&self) -> Option<&str> {
        if self.retry_count > 0 && !self.safety_feedback.is_empty() {
            Some(&self.safety_feedback)
        } else {
            None
        }
    }

    pub fn report(&self) -> Option<&SafetyReport> {
        self.report.as_ref()
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }
}
