//! The feedback engine.
//!
//! One invocation builds one prompt, issues one generation call, and parses
//! the response. There is no retry, no queuing, no caching, and no shared
//! mutable state between invocations.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use uuid::Uuid;

use crate::catalog::ExperimentDefinition;
use crate::parser::FeedbackResult;
use crate::prompt::{build_prompt, FeedbackTone};
use crate::traits::{GenerateRequest, TextGenerator};

/// Model identifier used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sampling temperature used when the configuration does not set one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Configuration for the feedback engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model identifier sent with every request.
    pub model: String,
    /// System-prompt tone for this deployment.
    pub tone: FeedbackTone,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            tone: FeedbackTone::Guided,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// The feedback engine.
pub struct FeedbackEngine {
    generator: Arc<dyn TextGenerator>,
    config: EngineConfig,
}

impl FeedbackEngine {
    pub fn new(generator: Arc<dyn TextGenerator>, config: EngineConfig) -> Self {
        Self { generator, config }
    }

    /// Request feedback on a student's procedure for one experiment.
    ///
    /// Callers validate beforehand that `student_procedure` is non-empty
    /// after trimming. Any provider failure propagates unchanged; the
    /// operation is never retried and nothing is cached.
    pub async fn request_feedback(
        &self,
        definition: &ExperimentDefinition,
        student_procedure: &str,
    ) -> Result<FeedbackResult> {
        let request_id = Uuid::new_v4();
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(&definition.procedure_text(), student_procedure),
            system_prompt: self.config.tone.system_prompt().to_string(),
            temperature: self.config.temperature,
        };

        tracing::debug!(
            %request_id,
            experiment = %definition.id,
            model = %request.model,
            tone = %self.config.tone,
            generator = self.generator.name(),
            "requesting feedback"
        );

        let start = Instant::now();
        let response = self.generator.generate(&request).await?;
        tracing::debug!(
            %request_id,
            latency_ms = start.elapsed().as_millis() as u64,
            response_bytes = response.text.len(),
            "response received"
        );

        let result = FeedbackResult::from_raw(&response.text);
        if !result.is_structured() {
            tracing::warn!(%request_id, "response carried no section headings, keeping raw text");
        }
        Ok(result)
    }
}
