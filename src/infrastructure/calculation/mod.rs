//! Calculation engine implementations

mod extractor;
mod pressure_flow;

pub use extractor::DefaultFlowExtractor;
pub use pressure_flow::{
    PressureFlowCalculator, BASELINE_PRESSURE_PSI, HIGH_PRESSURE_THRESHOLD_PSI,
};
