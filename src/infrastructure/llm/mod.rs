//! HTTP plumbing for hosted language model APIs

mod http_client;

pub use http_client::{HttpClient, HttpClientTrait};

#[cfg(test)]
pub use http_client::mock;
