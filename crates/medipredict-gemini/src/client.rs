//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! The API key is read from the environment on every call, never cached, so
//! a key exported after startup is picked up on the next submission. A
//! missing key fails before any network activity.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PredictionError;
use crate::service::{ModelOutput, PredictionService};
use crate::tokens;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Consulted when the configured variable is unset.
const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fixed generation parameters for every prediction call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model_id: String,
    /// Kept low for consistent, analytic replies.
    pub temperature: f32,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// Read the API key from `env_name`, falling back to `GEMINI_API_KEY`.
/// Empty values count as unset.
pub fn resolve_api_key(env_name: &str) -> Option<String> {
    [env_name, FALLBACK_API_KEY_ENV]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|k| !k.trim().is_empty()))
}

pub struct GeminiClient {
    http: reqwest::Client,
    settings: GenerationSettings,
}

impl GeminiClient {
    /// Build a client. Only the connection phase is time-limited; a started
    /// generation runs to completion.
    pub fn new(settings: GenerationSettings) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| PredictionError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model_id,
        )
    }

    fn api_key(&self) -> Result<String, PredictionError> {
        resolve_api_key(&self.settings.api_key_env)
            .ok_or_else(|| PredictionError::MissingCredential(self.settings.api_key_env.clone()))
    }

    fn request_body<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a serde_json::Value,
    ) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
                temperature: self.settings.temperature,
            },
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub(crate) prompt_token_count: u64,
    #[serde(default)]
    pub(crate) candidates_token_count: u64,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

impl PredictionService for GeminiClient {
    fn model_id(&self) -> &str {
        &self.settings.model_id
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<ModelOutput, PredictionError> {
        let api_key = self.api_key()?;
        let body = self.request_body(prompt, schema);

        debug!(model = %self.settings.model_id, prompt_len = prompt.len(), "calling generateContent");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PredictionError::Transport(format!(
                        "cannot reach {}: {e}",
                        self.settings.base_url
                    ))
                } else if e.is_timeout() {
                    PredictionError::Transport(format!("request timed out: {e}"))
                } else {
                    PredictionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generateContent returned an error status");
            return Err(PredictionError::Transport(format!(
                "service returned {status}: {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::Transport(format!("unreadable service response: {e}")))?;

        Ok(ModelOutput {
            text: parsed.text(),
            usage: parsed
                .usage_metadata
                .as_ref()
                .map(tokens::extract_token_usage)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(settings: GenerationSettings) -> GeminiClient {
        GeminiClient::new(settings).unwrap()
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let c = client(GenerationSettings {
            base_url: "http://localhost:8080/".to_string(),
            ..GenerationSettings::default()
        });
        assert_eq!(
            c.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_carries_schema_and_temperature() {
        let c = client(GenerationSettings::default());
        let schema = serde_json::json!({ "type": "OBJECT" });
        let body = serde_json::to_value(c.request_body("hello", &schema)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 80 }
        }))
        .unwrap();

        assert_eq!(parsed.text(), "{\"a\":1}");
        let usage = tokens::extract_token_usage(parsed.usage_metadata.as_ref().unwrap());
        assert_eq!(usage.total(), 200);
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": {} })).unwrap();
        assert_eq!(parsed.text(), "");
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let c = client(GenerationSettings {
            // Unroutable; a network attempt would surface as Transport instead.
            base_url: "http://127.0.0.1:9".to_string(),
            api_key_env: "MEDIPREDICT_TEST_UNSET_KEY".to_string(),
            ..GenerationSettings::default()
        });
        if std::env::var(FALLBACK_API_KEY_ENV).is_ok() {
            return;
        }

        let err = c.generate("prompt", &serde_json::json!({})).await.unwrap_err();
        assert!(matches!(
            err,
            PredictionError::MissingCredential(ref name) if name == "MEDIPREDICT_TEST_UNSET_KEY"
        ));
    }
}
