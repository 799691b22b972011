//! labcoach-providers — text generation backends.
//!
//! Implements the `TextGenerator` trait for the Gemini API, plus a mock
//! generator for exercising the feedback engine without network access.

pub mod config;
pub mod gemini;
pub mod mock;

pub use config::{create_generator, load_config, load_config_from, AppConfig};
pub use labcoach_core::error::ProviderError;
