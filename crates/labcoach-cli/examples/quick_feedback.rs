//! Quick feedback example — minimal programmatic usage of labcoach.
//!
//! This example demonstrates how to use labcoach as a library to request
//! feedback on a procedure programmatically.
//!
//! ```bash
//! # Set your API key first:
//! export GEMINI_API_KEY="your-key-here"
//!
//! # Run the example:
//! cargo run -p labcoach-cli --example quick_feedback
//! ```

use labcoach_core::catalog::{self, ExperimentId};
use labcoach_core::engine::{EngineConfig, FeedbackEngine};
use labcoach_providers::config::{create_generator, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config from labcoach.toml (or defaults)
    let config = load_config()?;

    // Pick an experiment from the catalog
    let definition = catalog::definition(ExperimentId::Light);
    println!("Experiment: {}", definition.display_name);

    // Configure the feedback engine
    let engine = FeedbackEngine::new(
        create_generator(&config),
        EngineConfig {
            model: config.model.clone(),
            tone: config.tone,
            temperature: config.temperature,
        },
    );

    // A deliberately incomplete student procedure
    let student_procedure = "\
        Put the plant in the sunlight.\n\
        Test a leaf with iodine solution.";

    println!("\nRequesting feedback...\n");
    let feedback = engine.request_feedback(definition, student_procedure).await?;

    // Print the parsed sections
    if let Some(well_done) = &feedback.well_done {
        println!("What you did well:\n{well_done}\n");
    }
    match &feedback.areas_for_improvement {
        Some(improvement) => println!("How you can improve:\n{improvement}"),
        None => println!("{}", feedback.raw_text),
    }

    Ok(())
}
