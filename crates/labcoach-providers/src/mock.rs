//! Mock generator for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use labcoach_core::traits::{GenerateRequest, GenerateResponse, TextGenerator};

const DEFAULT_FEEDBACK: &str = "### Well Done\n\
     - You remembered to include a control.\n\
     ### Areas for Improvement\n\
     1. Think about how long each stage of the experiment should take.";

/// A mock text generator for testing the feedback engine without real API
/// calls.
///
/// Returns configurable responses based on prompt content matching.
pub struct MockGenerator {
    /// Map of prompt substring to canned feedback.
    responses: HashMap<String, String>,
    /// Default feedback if no prompt matches.
    default_response: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockGenerator {
    /// Create a new mock generator with the given prompt-to-feedback mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: DEFAULT_FEEDBACK.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same feedback.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this generator.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        // Find a matching response based on prompt content
        let text = self
            .responses
            .iter()
            .find(|(key, _)| request.prompt.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(GenerateResponse {
            text,
            model: request.model.clone(),
        })
    }
}
