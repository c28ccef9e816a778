use medipredict_core::models::token_count::TokenCount;

use crate::client::UsageMetadata;

/// Extract token counts from a `generateContent` response.
pub(crate) fn extract_token_usage(usage: &UsageMetadata) -> TokenCount {
    TokenCount {
        input: usage.prompt_token_count,
        output: usage.candidates_token_count,
    }
}
