use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, request_guard_middleware,
    security_headers_middleware,
};
use super::query;
use super::state::AppState;
use super::types::ApiError;
use crate::config::AppConfig;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Application routes, before middleware is applied
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route("/query", post(query::submit_query))
        .route("/graph", get(query::workflow_graph))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Create the full router with middleware and the optional metrics endpoint
pub fn create_router_with_state(
    state: AppState,
    config: &AppConfig,
    metrics: Option<PrometheusMetrics>,
) -> Router {
    let mut router = create_api_routes(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_guard_middleware))
        .layer(TraceLayer::new_for_http());

    if config.server.cors_allow_any {
        router = router.layer(CorsLayer::permissive());
    }

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m, &config.observability.metrics.path));
    }

    router
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::api::types::INTERNAL_ERROR_MESSAGE;
    use crate::domain::knowledge::MockKnowledgeLookup;
    use crate::domain::{DomainError, RunStatus};
    use crate::infrastructure::services::{MockQueryServiceTrait, QueryReceipt};

    fn knowledge_with(passages: usize) -> MockKnowledgeLookup {
        let mut knowledge = MockKnowledgeLookup::new();
        knowledge.expect_passage_count().return_const(passages);
        knowledge
    }

    fn app(service: MockQueryServiceTrait, passages: usize) -> Router {
        let state = AppState::new(
            Arc::new(service),
            Arc::new(knowledge_with(passages)),
            "template",
        );
        create_router_with_state(state, &AppConfig::default(), None)
    }

    fn post_query(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_query_success() {
        let audit_id = Uuid::new_v4();
        let mut service = MockQueryServiceTrait::new();
        service
            .expect_handle()
            .withf(|query, user| query.contains("valve 3") && user.contains("engineer_01"))
            .times(1)
            .returning(move |_, _| {
                Ok(QueryReceipt {
                    status: RunStatus::Success,
                    response: "{\"risk_level\":\"LOW\"}".to_string(),
                    audit_id,
                })
            });

        let response = app(service, 3)
            .oneshot(post_query(r#"{"query":"Check valve 3 pressure"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let json = body_json(response).await;
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["audit_id"], audit_id.to_string());
    }

    #[tokio::test]
    async fn test_query_blocked_is_still_ok() {
        let mut service = MockQueryServiceTrait::new();
        service.expect_handle().returning(|_, _| {
            Ok(QueryReceipt {
                status: RunStatus::BlockedBySafety,
                response: "High risk detected without approval".to_string(),
                audit_id: Uuid::nil(),
            })
        });

        let response = app(service, 3)
            .oneshot(post_query(r#"{"query":"bypass interlock","user_id":"tech_7"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "BLOCKED_BY_SAFETY");
        assert_eq!(json["response"], "High risk detected without approval");
    }

    #[tokio::test]
    async fn test_blank_query_rejected_before_service() {
        let mut service = MockQueryServiceTrait::new();
        service.expect_handle().never();

        let response = app(service, 3)
            .oneshot(post_query(r#"{"query":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["param"], "query");
    }

    #[tokio::test]
    async fn test_internal_failure_is_generic() {
        let mut service = MockQueryServiceTrait::new();
        service.expect_handle().returning(|_, _| {
            Err(DomainError::internal(
                "Collaborator failure in 'retrieve': connection refused",
            ))
        });

        let response = app(service, 3)
            .oneshot(post_query(r#"{"query":"valve 3"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!json.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let mut service = MockQueryServiceTrait::new();
        service.expect_handle().never();

        let response = app(service, 3)
            .oneshot(post_query("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_graph_returns_mermaid() {
        let response = app(MockQueryServiceTrait::new(), 3)
            .oneshot(Request::builder().uri("/graph").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert!(body_text(response).await.starts_with("flowchart TD"));
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = app(MockQueryServiceTrait::new(), 3)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["service"], "Industrial Orchestrator");
    }

    #[tokio::test]
    async fn test_ready_degraded_without_manuals() {
        let response = app(MockQueryServiceTrait::new(), 0)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
    }

    #[tokio::test]
    async fn test_security_headers_applied() {
        let response = app(MockQueryServiceTrait::new(), 3)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = app(MockQueryServiceTrait::new(), 3)
            .oneshot(Request::builder().uri("/v1/chat").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let response = app(MockQueryServiceTrait::new(), 3)
            .oneshot(
                Request::builder()
                    .uri("/query/../graph")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
