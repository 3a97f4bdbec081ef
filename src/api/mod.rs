//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod query;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_api_routes, create_router_with_state};
pub use state::AppState;
