//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use config::{MetricsConfig, ObservabilityConfig, DEFAULT_METRICS_PATH};
pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_safety_rejection,
    record_workflow_run, PrometheusMetrics,
};
