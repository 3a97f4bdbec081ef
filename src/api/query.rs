//! Query and workflow graph endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, QueryRequest, QueryResponse};
use crate::domain::workflow::graph;

/// POST /query
pub async fn submit_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("query must not be empty").with_param("query"));
    }

    debug!(user_id = %request.user_id, "Received query");

    let receipt = state
        .query_service
        .handle(&request.query, &request.user_id)
        .await?;

    Ok(Json(receipt.into()))
}

/// GET /graph - Mermaid source of the workflow state machine
pub async fn workflow_graph() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        graph::mermaid(),
    )
}
