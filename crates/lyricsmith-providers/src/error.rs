//! Provider error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("rate limit exceeded: retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider unavailable: {provider}")]
    Unavailable { provider: String },
}

/// The single user-facing failure of a lyrics generation.
///
/// The underlying [`ProviderError`] is logged, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to connect to AI service. Please try again.")]
pub struct GenerationFailed;
