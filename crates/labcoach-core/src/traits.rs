//! Core trait definition for text-generation backends.
//!
//! The async trait is implemented by the `labcoach-providers` crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for backends that turn a prompt into feedback text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Issue exactly one generation call for the given request.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
}

/// A single text-generation request.
///
/// Constructed fresh for every feedback invocation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "gemini-2.0-flash").
    pub model: String,
    /// The user prompt, holding both procedures.
    pub prompt: String,
    /// The fixed instructional system prompt.
    pub system_prompt: String,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The raw response text.
    pub text: String,
    /// Model that produced the response.
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serde_roundtrip() {
        let request = GenerateRequest {
            model: "gemini-2.0-flash".into(),
            prompt: "**Model Procedure:**\n1. Destarch.".into(),
            system_prompt: "Be helpful.".into(),
            temperature: 0.7,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: GenerateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model, "gemini-2.0-flash");
        assert_eq!(back.temperature, 0.7);
    }
}
