//! Application configuration and generator factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use labcoach_core::engine::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use labcoach_core::prompt::FeedbackTone;
use labcoach_core::traits::TextGenerator;

use crate::gemini::GeminiProvider;

/// Top-level labcoach configuration.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure
/// in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key, or a `${VAR}` reference resolved at load time.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Model to request feedback from.
    #[serde(default = "default_model")]
    pub model: String,
    /// Feedback tone served to students.
    #[serde(default)]
    pub tone: FeedbackTone,
    /// Sampling temperature passed to the model.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Override for the API endpoint. Used by tests and proxy deployments.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("tone", &self.tone)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_api_key() -> String {
    "${GEMINI_API_KEY}".to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            model: default_model(),
            tone: FeedbackTone::default(),
            temperature: default_temperature(),
            base_url: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `labcoach.toml` in the current directory
/// 2. `~/.config/labcoach/config.toml`
///
/// Environment variable override: `LABCOACH_GEMINI_KEY`.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("labcoach.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    // Apply env var override, then resolve `${VAR}` references
    if let Ok(key) = std::env::var("LABCOACH_GEMINI_KEY") {
        config.api_key = key;
    }
    config.api_key = resolve_env_vars(&config.api_key);
    config.base_url = config.base_url.as_deref().map(resolve_env_vars);

    anyhow::ensure!(
        (0.0..=2.0).contains(&config.temperature),
        "temperature must be between 0.0 and 2.0 (got {})",
        config.temperature
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("labcoach"))
}

/// Create the configured text generator.
pub fn create_generator(config: &AppConfig) -> Arc<dyn TextGenerator> {
    Arc::new(GeminiProvider::new(&config.api_key, config.base_url.clone()))
}
