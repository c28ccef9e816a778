//! The structured-output contract handed to the model.

use medipredict_core::models::prediction::RiskLevel;
use serde_json::json;

/// Keys every reply must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "riskScore",
    "riskLevel",
    "analysis",
    "contributingFactors",
    "recommendations",
];

/// Build the response schema in the Gemini `responseSchema` dialect.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "riskScore": {
                "type": "NUMBER",
                "description": "A probability score from 0 to 100 indicating risk level."
            },
            "riskLevel": {
                "type": "STRING",
                "enum": RiskLevel::ALL.map(|level| level.as_str())
            },
            "analysis": {
                "type": "STRING",
                "description": "A comprehensive medical analysis of the provided data points."
            },
            "contributingFactors": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of specific metrics that contributed most to the risk score."
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Actionable medical or lifestyle recommendations."
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_required_field_has_a_property() {
        let schema = response_schema();
        for key in REQUIRED_FIELDS {
            assert!(schema["properties"][key].is_object(), "missing property {key}");
        }
        assert_eq!(schema["required"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn risk_level_enum_lists_all_levels() {
        let schema = response_schema();
        assert_eq!(
            schema["properties"]["riskLevel"]["enum"],
            json!(["Low", "Moderate", "High", "Critical"])
        );
    }
}
