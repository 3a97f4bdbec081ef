//! Health check endpoints for Kubernetes liveness and readiness checks

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Service banner for clients that call `/`
#[derive(Serialize)]
pub struct ServiceBanner {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn root() -> impl IntoResponse {
    Json(ServiceBanner {
        status: "healthy",
        service: "Industrial Orchestrator",
    })
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check.
///
/// An empty knowledge base leaves the service usable but degraded: every
/// retrieval answers with "no relevant manuals".
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let passages = state.knowledge.passage_count().await;
    let knowledge_check = if passages > 0 {
        HealthCheck {
            name: "knowledge_base".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} passages loaded", passages)),
        }
    } else {
        HealthCheck {
            name: "knowledge_base".to_string(),
            status: HealthStatus::Degraded,
            message: Some("no manuals loaded".to_string()),
        }
    };

    let synthesizer_check = HealthCheck {
        name: "synthesizer".to_string(),
        status: HealthStatus::Healthy,
        message: Some(state.synthesizer_name.to_string()),
    };

    let overall_status = if knowledge_check.status == HealthStatus::Healthy {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![knowledge_check, synthesizer_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    // Degraded still accepts requests
    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_health_response_with_checks() {
        let response = HealthResponse {
            status: HealthStatus::Degraded,
            version: "1.0.0".to_string(),
            checks: Some(vec![HealthCheck {
                name: "knowledge_base".to_string(),
                status: HealthStatus::Degraded,
                message: Some("no manuals loaded".to_string()),
            }]),
            latency_ms: Some(1),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"degraded\""));
        assert!(json.contains("\"knowledge_base\""));
        assert!(json.contains("no manuals loaded"));
    }

    #[test]
    fn test_banner_serialization() {
        let json = serde_json::to_string(&ServiceBanner {
            status: "healthy",
            service: "Industrial Orchestrator",
        })
        .unwrap();

        assert_eq!(
            json,
            r#"{"status":"healthy","service":"Industrial Orchestrator"}"#
        );
    }
}
