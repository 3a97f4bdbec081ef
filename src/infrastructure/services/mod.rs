//! Infrastructure services

mod query_service;

pub use query_service::{QueryReceipt, QueryService, QueryServiceTrait};

#[cfg(test)]
pub use query_service::MockQueryServiceTrait;
