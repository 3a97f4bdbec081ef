//! Calculation engine contract and parameter extraction

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Default fluid viscosity (light crude)
pub const DEFAULT_VISCOSITY: f64 = 0.9;

/// Default flow rate in m³/h used when no parameters are extracted
pub const DEFAULT_FLOW_RATE: f64 = 200.0;

/// Outcome tag of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationStatus {
    Nominal,
    HighPressureWarning,
    Error,
}

impl CalculationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationStatus::Nominal => "NOMINAL",
            CalculationStatus::HighPressureWarning => "HIGH_PRESSURE_WARNING",
            CalculationStatus::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for CalculationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured result of a pressure calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub input_flow_rate: f64,
    /// Estimated line pressure in PSI
    pub estimated_pressure: f64,
    pub status: CalculationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl CalculationResult {
    pub fn error(input_flow_rate: f64, warning: impl Into<String>) -> Self {
        Self {
            input_flow_rate,
            estimated_pressure: 0.0,
            status: CalculationStatus::Error,
            warning: Some(warning.into()),
        }
    }
}

/// Numeric inputs to the calculation engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowParameters {
    /// Flow rate in m³/h
    pub flow_rate: f64,
    pub viscosity: f64,
}

impl FlowParameters {
    pub fn new(flow_rate: f64) -> Self {
        Self {
            flow_rate,
            viscosity: DEFAULT_VISCOSITY,
        }
    }

    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = viscosity;
        self
    }
}

impl Default for FlowParameters {
    fn default() -> Self {
        Self::new(DEFAULT_FLOW_RATE)
    }
}

/// Deterministic physics calculation.
///
/// Implementations must be pure: identical inputs give bit-identical
/// outputs, and invalid inputs yield an `ERROR` result instead of failing.
pub trait CalculationEngine: Send + Sync + std::fmt::Debug {
    fn compute(&self, params: FlowParameters) -> CalculationResult;
}

/// Derives calculation inputs from a free-text query
pub trait ParameterExtractor: Send + Sync + std::fmt::Debug {
    fn extract(&self, query: &str) -> Result<FlowParameters, DomainError>;
}
