//! Integration test against the real Gemini API.
//!
//! Requires an API key in the environment (`API_KEY` or `GEMINI_API_KEY`).
//!
//! Run with: `cargo test -p medipredict-gemini --test live_generate -- --ignored`

use medipredict_catalog::controller::FormController;
use medipredict_catalog::get_disease;
use medipredict_core::models::disease::DiseaseType;
use medipredict_gemini::client::{GeminiClient, GenerationSettings};
use medipredict_gemini::prompt::build_request;
use medipredict_gemini::transaction::predict;

#[tokio::test]
#[ignore]
async fn live_prediction_returns_valid_result() {
    let client = GeminiClient::new(GenerationSettings::default()).expect("client should build");

    for disease_type in DiseaseType::ALL {
        let data = FormController::default()
            .initialize(get_disease(disease_type).as_ref())
            .unwrap();
        let request = build_request(disease_type, data).unwrap();

        let result = predict(&client, &request)
            .await
            .expect("live prediction should succeed");

        println!(
            "{disease_type}: {} ({}), {} input / {} output tokens",
            result.output.risk_level,
            result.output.risk_score,
            result.transaction.usage.input,
            result.transaction.usage.output,
        );
        assert!((0.0..=100.0).contains(&result.output.risk_score));
        assert!(!result.output.analysis.is_empty());
    }
}
