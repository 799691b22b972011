//! End-to-end pipeline tests wiring the feedback engine to real generators.
//!
//! These run the whole path (catalog → prompt → generator → section parser)
//! in-process, and the `feedback` binary against a stubbed Gemini endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use labcoach_core::catalog::{self, ExperimentId};
use labcoach_core::engine::{EngineConfig, FeedbackEngine};
use labcoach_core::parser::FeedbackResult;
use labcoach_providers::gemini::GeminiProvider;
use labcoach_providers::mock::MockGenerator;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_engine(generator: Arc<MockGenerator>) -> FeedbackEngine {
    FeedbackEngine::new(generator, EngineConfig::default())
}

// --- In-process pipeline, mock generator ---

#[tokio::test]
async fn pipeline_parses_structured_feedback() {
    let generator = Arc::new(MockGenerator::with_fixed_response(
        "### Well Done\n- You kept a control plant.\n\
         ### Areas for Improvement\n1. Say how long the plant stays in darkness.",
    ));
    let engine = make_engine(generator.clone());

    let result = engine
        .request_feedback(
            catalog::definition(ExperimentId::Light),
            "Put a leaf in the dark, then in the sun, then test with iodine.",
        )
        .await
        .unwrap();

    assert!(result.is_structured());
    assert_eq!(result.well_done.as_deref(), Some("- You kept a control plant."));
    assert_eq!(
        result.areas_for_improvement.as_deref(),
        Some("1. Say how long the plant stays in darkness.")
    );
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn pipeline_prompt_carries_catalog_and_student_text() {
    let generator = Arc::new(MockGenerator::with_fixed_response("ok"));
    let engine = make_engine(generator.clone());

    engine
        .request_feedback(
            catalog::definition(ExperimentId::CarbonDioxide),
            "Set up two flasks and wait a day.",
        )
        .await
        .unwrap();

    let request = generator.last_request().unwrap();
    assert!(request.prompt.contains("**Model Procedure:**"));
    assert!(request.prompt.contains("soda lime granules"));
    assert!(request.prompt.contains("**Student's Procedure:**"));
    assert!(request.prompt.contains("Set up two flasks and wait a day."));
    assert!(request.system_prompt.contains("### Well Done"));
}

#[tokio::test]
async fn pipeline_falls_back_on_unstructured_text() {
    let generator = Arc::new(MockGenerator::with_fixed_response(
        "Great effort! Keep refining the details.",
    ));
    let engine = make_engine(generator);

    let result = engine
        .request_feedback(
            catalog::definition(ExperimentId::Chlorophyll),
            "Boil the leaf and add iodine.",
        )
        .await
        .unwrap();

    assert!(!result.is_structured());
    assert_eq!(result.raw_text, "Great effort! Keep refining the details.");
}

#[tokio::test]
async fn pipeline_routes_by_experiment_content() {
    // Keys match steps unique to one experiment's model procedure.
    let mut responses = HashMap::new();
    responses.insert(
        "aluminium foil".to_string(),
        "### Areas for Improvement\n1. Name the destarching duration.".to_string(),
    );
    responses.insert(
        "variegated".to_string(),
        "### Areas for Improvement\n1. Sketch the leaf pattern first.".to_string(),
    );
    let generator = Arc::new(MockGenerator::new(responses));
    let engine = make_engine(generator);

    let light = engine
        .request_feedback(catalog::definition(ExperimentId::Light), "My plan.")
        .await
        .unwrap();
    let chlorophyll = engine
        .request_feedback(catalog::definition(ExperimentId::Chlorophyll), "My plan.")
        .await
        .unwrap();

    assert!(light
        .areas_for_improvement
        .as_deref()
        .unwrap()
        .contains("destarching duration"));
    assert!(chlorophyll
        .areas_for_improvement
        .as_deref()
        .unwrap()
        .contains("leaf pattern"));
}

// --- In-process pipeline, Gemini provider against a stubbed endpoint ---

#[tokio::test]
async fn pipeline_propagates_gemini_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let engine = FeedbackEngine::new(
        Arc::new(GeminiProvider::new("test-key", Some(server.uri()))),
        EngineConfig::default(),
    );

    let err = engine
        .request_feedback(catalog::definition(ExperimentId::Light), "My plan.")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("quota exhausted"));
}

// --- Full binary against a stubbed endpoint ---

fn stub_feedback_body() -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "text": "### Well Done\n- Clear step order.\n\
                             ### Areas for Improvement\n1. State how long each step takes."
                }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn feedback_binary_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stub_feedback_body()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("labcoach.toml");
    std::fs::write(
        &config_path,
        format!("api_key = \"test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("labcoach").unwrap();
    cmd.env_remove("LABCOACH_GEMINI_KEY")
        .arg("feedback")
        .arg("--experiment")
        .arg("light")
        .arg("--config")
        .arg(&config_path)
        .write_stdin("Cover part of a leaf with foil and leave the plant in the sun.")
        .assert()
        .success()
        .stdout(predicates::str::contains("Your Feedback"))
        .stdout(predicates::str::contains("What you did well:"))
        .stdout(predicates::str::contains("- Clear step order."))
        .stdout(predicates::str::contains("How you can improve:"))
        .stdout(predicates::str::contains("1. State how long each step takes."));
}

#[tokio::test(flavor = "multi_thread")]
async fn feedback_binary_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stub_feedback_body()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("labcoach.toml");
    std::fs::write(
        &config_path,
        format!("api_key = \"test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("labcoach").unwrap();
    let output = cmd
        .env_remove("LABCOACH_GEMINI_KEY")
        .arg("feedback")
        .arg("--experiment")
        .arg("chlorophyll")
        .arg("--config")
        .arg(&config_path)
        .arg("--json")
        .write_stdin("Boil a variegated leaf, bleach it, then add iodine.")
        .assert()
        .success()
        .get_output()
        .clone();

    let parsed: FeedbackResult = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed.is_structured());
    assert_eq!(parsed.well_done.as_deref(), Some("- Clear step order."));
}
