//! Shared error types.
//!
//! These are defined in `labcoach-core` so the feedback engine and the CLI
//! can classify failures by variant without string matching.

use thiserror::Error;

/// Returned by catalog lookups when the id is not one of the known experiments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown experiment: '{0}' (known ids: light, carbon-dioxide, chlorophyll)")]
pub struct UnknownExperiment(pub String);

/// Errors that can occur when talking to the text-generation service.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was supplied by the deployment environment.
    #[error("API key not found. Please ask your teacher to configure the application's secrets")]
    MissingApiKey,

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API rejected the request because the quota is used up.
    #[error("quota exhausted: {0}")]
    QuotaExhausted(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered without any usable candidate text.
    #[error("the model returned an empty response")]
    EmptyResponse,
}

impl ProviderError {
    /// Returns `true` if this error is a deployment misconfiguration rather
    /// than a runtime fault.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ProviderError::MissingApiKey)
    }
}
