//! Simplified Darcy-Weisbach pressure estimate

use std::f64::consts::PI;

use crate::domain::calculation::{
    CalculationEngine, CalculationResult, CalculationStatus, FlowParameters, DEFAULT_VISCOSITY,
};

const FRICTION_FACTOR: f64 = 0.02;
const PIPE_DIAMETER_M: f64 = 0.1;
const FLUID_DENSITY_KG_M3: f64 = 850.0;
const PASCAL_TO_PSI: f64 = 0.000145038;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Line pressure before friction losses
pub const BASELINE_PRESSURE_PSI: f64 = 1000.0;

/// Pressure above which the relief valve threshold is approached
pub const HIGH_PRESSURE_THRESHOLD_PSI: f64 = 1200.0;

/// Deterministic pressure-flow calculator.
///
/// Friction scales linearly with viscosity relative to light crude (0.9).
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureFlowCalculator;

impl PressureFlowCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl CalculationEngine for PressureFlowCalculator {
    fn compute(&self, params: FlowParameters) -> CalculationResult {
        let FlowParameters {
            flow_rate,
            viscosity,
        } = params;

        if !flow_rate.is_finite() || flow_rate < 0.0 {
            return CalculationResult::error(flow_rate, "Flow rate cannot be negative.");
        }

        if !viscosity.is_finite() || viscosity < 0.0 {
            return CalculationResult::error(flow_rate, "Viscosity cannot be negative.");
        }

        let area = PI * (PIPE_DIAMETER_M / 2.0).powi(2);
        let velocity = flow_rate / (area * SECONDS_PER_HOUR);

        let friction = FRICTION_FACTOR * (viscosity / DEFAULT_VISCOSITY);
        let delta_p_pascal =
            friction * (1.0 / PIPE_DIAMETER_M) * (0.5 * FLUID_DENSITY_KG_M3 * velocity.powi(2));
        let total_psi = BASELINE_PRESSURE_PSI + delta_p_pascal * PASCAL_TO_PSI;

        let (status, warning) = if total_psi > HIGH_PRESSURE_THRESHOLD_PSI {
            (
                CalculationStatus::HighPressureWarning,
                Some("Approaching relief valve threshold.".to_string()),
            )
        } else {
            (CalculationStatus::Nominal, None)
        };

        CalculationResult {
            input_flow_rate: flow_rate,
            estimated_pressure: round_2dp(total_psi),
            status,
            warning,
        }
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(flow_rate: f64) -> CalculationResult {
        PressureFlowCalculator::new().compute(FlowParameters::new(flow_rate))
    }

    #[test]
    fn test_default_flow_is_nominal() {
        let result = compute(200.0);

        assert_eq!(result.status, CalculationStatus::Nominal);
        assert_eq!(result.estimated_pressure, 1000.62);
        assert_eq!(result.input_flow_rate, 200.0);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_compute_is_bit_identical_across_calls() {
        let first = compute(200.0);
        let second = compute(200.0);

        assert_eq!(
            first.estimated_pressure.to_bits(),
            second.estimated_pressure.to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_flow_is_error() {
        for flow in [-0.001, -1.0, -200.0, f64::NEG_INFINITY] {
            let result = compute(flow);
            assert_eq!(result.status, CalculationStatus::Error);
            assert_eq!(result.estimated_pressure, 0.0);
            assert_eq!(result.warning.as_deref(), Some("Flow rate cannot be negative."));
        }
    }

    #[test]
    fn test_nan_flow_is_error() {
        assert_eq!(compute(f64::NAN).status, CalculationStatus::Error);
    }

    #[test]
    fn test_zero_flow_is_baseline() {
        let result = compute(0.0);
        assert_eq!(result.estimated_pressure, BASELINE_PRESSURE_PSI);
        assert_eq!(result.status, CalculationStatus::Nominal);
    }

    #[test]
    fn test_high_flow_warns() {
        let result = compute(4000.0);

        assert_eq!(result.status, CalculationStatus::HighPressureWarning);
        assert!(result.estimated_pressure > HIGH_PRESSURE_THRESHOLD_PSI);
        assert_eq!(
            result.warning.as_deref(),
            Some("Approaching relief valve threshold.")
        );
    }

    #[test]
    fn test_just_below_threshold_is_nominal() {
        let result = compute(3500.0);
        assert_eq!(result.status, CalculationStatus::Nominal);
    }

    #[test]
    fn test_viscosity_scales_friction_loss() {
        let calculator = PressureFlowCalculator::new();
        let light = calculator.compute(FlowParameters::new(1000.0));
        let heavy = calculator.compute(FlowParameters::new(1000.0).with_viscosity(1.8));

        let light_loss = light.estimated_pressure - BASELINE_PRESSURE_PSI;
        let heavy_loss = heavy.estimated_pressure - BASELINE_PRESSURE_PSI;
        assert!((heavy_loss - 2.0 * light_loss).abs() < 0.02);
    }

    #[test]
    fn test_negative_viscosity_is_error() {
        let result = PressureFlowCalculator::new()
            .compute(FlowParameters::new(200.0).with_viscosity(-0.1));

        assert_eq!(result.status, CalculationStatus::Error);
        assert_eq!(result.estimated_pressure, 0.0);
    }
}
