mod client;

pub use client::TennisApiClient;

use async_trait::async_trait;

use crate::errors::UpstreamError;

/// Read-only access to the upstream tennis provider
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET `path` (relative to the provider base URL) and return the raw body
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, UpstreamError>;
}

/// Encode a caller-supplied identifier as a single path segment
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
