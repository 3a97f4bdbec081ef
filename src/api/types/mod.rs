//! API request, response and error types

pub mod error;
pub mod json;
pub mod query;

pub use error::{ApiError, ApiErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use json::Json;
pub use query::{QueryRequest, QueryResponse, DEFAULT_USER_ID};
