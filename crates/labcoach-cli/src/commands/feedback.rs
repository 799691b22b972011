//! The `labcoach feedback` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use labcoach_core::catalog;
use labcoach_core::engine::{EngineConfig, FeedbackEngine};
use labcoach_core::error::ProviderError;
use labcoach_providers::config::{create_generator, load_config_from};

pub async fn execute(
    experiment: String,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let definition = catalog::lookup(&experiment)?;

    let raw = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read procedure: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read procedure from stdin")?;
            buf
        }
    };
    let student_procedure = raw.trim();
    anyhow::ensure!(
        !student_procedure.is_empty(),
        "please enter your procedure before getting feedback"
    );

    let config = load_config_from(config_path.as_deref())?;
    // Fail before printing the wait message so students see the real problem.
    if config.api_key.trim().is_empty() {
        return Err(ProviderError::MissingApiKey.into());
    }

    let engine = FeedbackEngine::new(
        create_generator(&config),
        EngineConfig {
            model: config.model.clone(),
            tone: config.tone,
            temperature: config.temperature,
        },
    );

    tracing::debug!(experiment = %definition.id, model = %config.model, "requesting feedback");
    eprintln!("Analyzing your procedure... Please wait.");

    let feedback = engine
        .request_feedback(definition, student_procedure)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
        return Ok(());
    }

    println!("Your Feedback");
    println!("=============");
    println!();

    if let Some(well_done) = &feedback.well_done {
        println!("What you did well:");
        println!("{well_done}");
        println!();
    }
    match &feedback.areas_for_improvement {
        Some(improvement) => {
            println!("How you can improve:");
            println!("{improvement}");
        }
        // The model ignored the expected layout. Show its answer as-is.
        None => println!("{}", feedback.raw_text),
    }

    Ok(())
}
