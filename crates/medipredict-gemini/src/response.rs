//! Schema-checked parsing of the model's reply.
//!
//! The reply is untrusted text. It is turned into a [`PredictionResult`] in a
//! single pass that checks each required field by name and reports the first
//! one that is missing or mistyped.

use medipredict_core::models::prediction::{PredictionResult, RiskLevel};
use serde_json::{Map, Value};

use crate::error::{MalformedResponse, PredictionError};

/// Remove surrounding Markdown code-fence markers (```` ```json ```` / ```` ``` ````).
///
/// Text without a leading fence is returned trimmed but otherwise as-is.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop an info string such as `json` on the opening fence line.
    let body = match rest.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with('{') => body,
        _ => rest,
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate a model reply.
pub fn parse_response(raw: &str) -> Result<PredictionResult, PredictionError> {
    let text = strip_code_fence(raw);

    let value: Value = serde_json::from_str(text)
        .map_err(|e| MalformedResponse::document(format!("not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| MalformedResponse::document("expected a JSON object"))?;

    let risk_score = required(object, "riskScore")?
        .as_f64()
        .filter(|score| score.is_finite())
        .ok_or_else(|| MalformedResponse::field("riskScore", "expected a number"))?;
    if !(0.0..=100.0).contains(&risk_score) {
        return Err(MalformedResponse::field(
            "riskScore",
            format!("{risk_score} is outside [0, 100]"),
        )
        .into());
    }

    let label = text_field(object, "riskLevel")?;
    let risk_level = RiskLevel::from_label(label).ok_or_else(|| {
        MalformedResponse::field(
            "riskLevel",
            format!("'{label}' is not one of Low, Moderate, High, Critical"),
        )
    })?;

    Ok(PredictionResult {
        risk_score,
        risk_level,
        analysis: text_field(object, "analysis")?.to_string(),
        contributing_factors: text_list(object, "contributingFactors")?,
        recommendations: text_list(object, "recommendations")?,
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, MalformedResponse> {
    object
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| MalformedResponse::field(key, "missing"))
}

fn text_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, MalformedResponse> {
    required(object, key)?
        .as_str()
        .ok_or_else(|| MalformedResponse::field(key, "expected text"))
}

fn text_list(object: &Map<String, Value>, key: &str) -> Result<Vec<String>, MalformedResponse> {
    let items = required(object, key)?
        .as_array()
        .ok_or_else(|| MalformedResponse::field(key, "expected a list of text"))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| MalformedResponse::field(format!("{key}[{i}]"), "expected text"))
        })
        .collect()
}
