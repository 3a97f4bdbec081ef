//! State-machine workflow engine

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::config::WorkflowConfig;
use crate::domain::workflow::{PassVerdict, StepOutput};
use crate::domain::{
    AuditTrail, CalculationEngine, DiagnosticTrace, DomainError, DraftSynthesizer, Intent,
    KnowledgeLookup, ParameterExtractor, RejectionReason, RetryPolicy, RiskLevel, SafetyCheck,
    SafetyGate, SafetyReport, SafetyValidator, Stage, StepRecord, SynthesisRequest,
    ValidationOutcome,
    WorkflowError, WorkflowResult, WorkflowRunner, WorkflowState,
};
use crate::infrastructure::diagnostics::TracingDiagnostics;
use crate::infrastructure::observability::record_safety_rejection;

/// Limits applied to every run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowEngineConfig {
    pub max_retries: u32,
    /// Overall budget for a run; collaborator calls past it fail with a timeout
    pub deadline: Duration,
    pub max_allowed_risk: RiskLevel,
}

impl Default for WorkflowEngineConfig {
    fn default() -> Self {
        Self::from(&WorkflowConfig::default())
    }
}

impl From<&WorkflowConfig> for WorkflowEngineConfig {
    fn from(config: &WorkflowConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            deadline: Duration::from_millis(config.deadline_ms),
            max_allowed_risk: config.max_allowed_risk,
        }
    }
}

/// Runs queries through classify, route, retrieve/simulate, synthesize and
/// validate, looping back to classify on safety rejection.
pub struct WorkflowEngine {
    knowledge: Arc<dyn KnowledgeLookup>,
    calculator: Arc<dyn CalculationEngine>,
    extractor: Arc<dyn ParameterExtractor>,
    synthesizer: Arc<dyn DraftSynthesizer>,
    trace: Arc<dyn DiagnosticTrace>,
    validator: SafetyValidator,
    gate: SafetyGate,
    policy: RetryPolicy,
    deadline: Duration,
}

impl std::fmt::Debug for WorkflowEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowEngine")
            .field("synthesizer", &self.synthesizer.name())
            .field("gate", &self.gate)
            .field("policy", &self.policy)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

/// Bookkeeping for one run
struct Run {
    id: Uuid,
    started: Instant,
    deadline: Instant,
    steps: Vec<StepRecord>,
    checks: Vec<SafetyCheck>,
}

impl WorkflowEngine {
    pub fn new(
        knowledge: Arc<dyn KnowledgeLookup>,
        calculator: Arc<dyn CalculationEngine>,
        extractor: Arc<dyn ParameterExtractor>,
        synthesizer: Arc<dyn DraftSynthesizer>,
    ) -> Self {
        Self {
            knowledge,
            calculator,
            extractor,
            synthesizer,
            trace: Arc::new(TracingDiagnostics::new()),
            validator: SafetyValidator::new(),
            gate: SafetyGate::default(),
            policy: RetryPolicy::default(),
            deadline: WorkflowEngineConfig::default().deadline,
        }
    }

    pub fn with_config(mut self, config: WorkflowEngineConfig) -> Self {
        self.gate = SafetyGate::new(config.max_allowed_risk);
        self.policy = RetryPolicy::new(config.max_retries);
        self.deadline = config.deadline;
        self
    }

    pub fn with_trace(mut self, trace: Arc<dyn DiagnosticTrace>) -> Self {
        self.trace = trace;
        self
    }

    fn deadline_ms(&self) -> u64 {
        u64::try_from(self.deadline.as_millis()).unwrap_or(u64::MAX)
    }

    /// Await a collaborator call, bounded by the run deadline
    async fn call<T, F>(&self, stage: Stage, run: &Run, call: F) -> Result<T, WorkflowError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout_at(run.deadline, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(WorkflowError::collaborator(stage, e.to_string())),
            Err(_) => Err(WorkflowError::timeout(stage, self.deadline_ms())),
        }
    }

    /// Structural validation followed by the release gate
    fn assess(&self, draft: &str) -> Result<SafetyReport, RejectionReason> {
        let report = match self.validator.validate(draft) {
            ValidationOutcome::Approved { data } => data,
            ValidationOutcome::Rejected { reason } => return Err(reason),
        };

        self.gate.assess(&report)?;

        Ok(report)
    }

    fn record(&self, run: &mut Run, stage: Stage, pass: u32, detail: String, since: Instant) {
        let elapsed_ms = u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX);

        self.trace.emit(run.id, stage, &detail);
        run.steps.push(StepRecord::new(stage, pass, detail, elapsed_ms));
    }

    fn finish(&self, run: Run, state: &WorkflowState) -> AuditTrail {
        AuditTrail {
            intent: state.intent().unwrap_or(Intent::Hybrid),
            retry_count: state.retry_count(),
            steps: run.steps,
            safety_checks: run.checks,
            execution_time_ms: u64::try_from(run.started.elapsed().as_millis())
                .unwrap_or(u64::MAX),
        }
    }
}

#[async_trait]
impl WorkflowRunner for WorkflowEngine {
    async fn run(&self, query: &str) -> Result<WorkflowResult, WorkflowError> {
        let started = Instant::now();
        let mut run = Run {
            id: Uuid::new_v4(),
            started,
            deadline: started + self.deadline,
            steps: Vec::new(),
            checks: Vec::new(),
        };

        debug!(run_id = %run.id, "Starting workflow run");

        let mut state = WorkflowState::new(query);
        let mut stage = Stage::Classify;

        loop {
            let step_started = Instant::now();
            let pass = state.retry_count() + 1;

            let (next, detail) = match stage {
                Stage::Classify => {
                    let detail = match state.intent() {
                        Some(intent) => {
                            format!("Reusing intent {} for retry {}", intent, state.retry_count())
                        }
                        None => {
                            let intent = Intent::classify(query);
                            state = state.apply(StepOutput::Classified(intent));
                            format!("Intent classified as {}", intent)
                        }
                    };
                    (Stage::Route, detail)
                }

                Stage::Route => {
                    let intent = state.intent().unwrap_or(Intent::Hybrid);
                    let next = match intent {
                        Intent::Calculation => Stage::Simulate,
                        Intent::Retrieval | Intent::Hybrid => Stage::Retrieve,
                    };
                    (next, format!("Routing {} query to {}", intent, next))
                }

                Stage::Retrieve => {
                    let context = self
                        .call(Stage::Retrieve, &run, self.knowledge.lookup(query))
                        .await?;
                    let detail = format!("Retrieved {} chars of manual context", context.len());
                    state = state.apply(StepOutput::Retrieved(context));
                    (Stage::Synthesize, detail)
                }

                Stage::Simulate => {
                    let params = self
                        .extractor
                        .extract(query)
                        .map_err(|e| WorkflowError::collaborator(Stage::Simulate, e.to_string()))?;
                    let result = self.calculator.compute(params);
                    let detail = format!(
                        "Estimated pressure {} psi at {} m3/h ({})",
                        result.estimated_pressure, result.input_flow_rate, result.status
                    );
                    state = state.apply(StepOutput::Simulated(result));
                    (Stage::Synthesize, detail)
                }

                Stage::Synthesize => {
                    let draft = {
                        let request = SynthesisRequest::new(query)
                            .with_context(state.retrieved_context())
                            .with_calculation(state.calculation_result())
                            .with_feedback(state.pending_feedback());

                        self.call(Stage::Synthesize, &run, self.synthesizer.synthesize(request))
                            .await?
                    };
                    let detail = format!(
                        "Draft of {} chars synthesized by {}",
                        draft.len(),
                        self.synthesizer.name()
                    );
                    state = state.apply(StepOutput::Drafted(self.validator.redact(&draft)));
                    (Stage::Validate, detail)
                }

                Stage::Validate => {
                    let draft = state.draft_response();
                    let (is_safe, feedback, report, detail) = match self.assess(draft) {
                        Ok(report) => {
                            run.checks.push(SafetyCheck::approved(pass, draft));
                            let detail = format!("Draft approved on pass {}", pass);
                            (true, String::new(), Some(report), detail)
                        }
                        Err(reason) => {
                            record_safety_rejection(reason.kind.as_str());
                            let feedback = reason.to_string();
                            run.checks.push(SafetyCheck::rejected(pass, draft, feedback.as_str()));
                            let detail = format!("Draft rejected on pass {}: {}", pass, feedback);
                            (false, feedback, None, detail)
                        }
                    };

                    state = state.apply(StepOutput::Validated {
                        is_safe,
                        feedback,
                        report,
                    });

                    let next = match self.policy.decide(state.is_safe(), state.retry_count()) {
                        PassVerdict::Approve => Stage::Approved,
                        PassVerdict::Exhausted => Stage::Exceeded,
                        PassVerdict::Retry => {
                            state = state.apply(StepOutput::RetryScheduled);
                            Stage::Classify
                        }
                    };
                    (next, detail)
                }

                Stage::Approved => {
                    self.record(&mut run, stage, pass, "Run approved".to_string(), step_started);

                    let response = state.draft_response().to_string();
                    let report = match state.report() {
                        Some(report) => report.clone(),
                        None => {
                            return Err(WorkflowError::collaborator(
                                Stage::Validate,
                                "approved run without a report",
                            ));
                        }
                    };

                    return Ok(WorkflowResult::Success {
                        response,
                        report,
                        audit_trail: self.finish(run, &state),
                    });
                }

                Stage::Exceeded => {
                    let detail = format!(
                        "Retry bound of {} exhausted, blocking response",
                        self.policy.max_retries()
                    );
                    self.record(&mut run, stage, pass, detail, step_started);

                    return Ok(WorkflowResult::Blocked {
                        reason: state.safety_feedback().to_string(),
                        last_draft: state.draft_response().to_string(),
                        audit_trail: self.finish(run, &state),
                    });
                }
            };

            self.record(&mut run, stage, pass, detail, step_started);
            stage = next;
        }
    }
}
