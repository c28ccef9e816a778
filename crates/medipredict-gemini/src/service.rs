use std::future::Future;

use medipredict_core::models::token_count::TokenCount;

use crate::error::PredictionError;

/// Raw reply from a generative model, before validation.
#[derive(Debug, Clone, Default)]
pub struct ModelOutput {
    pub text: String,
    pub usage: TokenCount,
}

/// An external generative model that accepts a prompt plus a
/// structured-output schema and replies with text.
///
/// [`crate::client::GeminiClient`] is the production implementation; tests
/// substitute stubs.
pub trait PredictionService: Send + Sync {
    fn model_id(&self) -> &str;

    /// Perform exactly one outbound generation call.
    fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> impl Future<Output = Result<ModelOutput, PredictionError>> + Send;
}
