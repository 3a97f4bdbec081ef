//! Query endpoint request and response bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RunStatus;
use crate::infrastructure::services::QueryReceipt;

/// Requester used when the client does not identify itself
pub const DEFAULT_USER_ID: &str = "engineer_01";

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status: RunStatus,
    pub response: String,
    pub audit_id: Uuid,
}

impl From<QueryReceipt> for QueryResponse {
    fn from(receipt: QueryReceipt) -> Self {
        Self {
            status: receipt.status,
            response: receipt.response,
            audit_id: receipt.audit_id,
        }
    }
}
