//! Backend access
//!
//! Endpoint paths and the HTTP client used by page compositions.

use thiserror::Error;

pub mod client;
pub mod endpoints;

pub use client::ApiClient;
pub use endpoints::{Endpoint, EndpointError};

/// Backend call errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend returned {status} for {url}")]
    Status { status: u16, url: String },
}
