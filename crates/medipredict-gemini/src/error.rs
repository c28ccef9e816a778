use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("API key missing: set the {0} environment variable")]
    MissingCredential(String),

    #[error("prediction service call failed: {0}")]
    Transport(String),

    #[error("response did not conform to expected schema: {0}")]
    MalformedResponse(#[from] MalformedResponse),

    #[error("prediction service returned no text")]
    EmptyResponse,
}

/// Why a model reply failed validation, naming the offending field when
/// the document itself parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}{reason}", field_prefix(.field))]
pub struct MalformedResponse {
    /// `None` when the reply is not a JSON object at all.
    pub field: Option<String>,
    pub reason: String,
}

impl MalformedResponse {
    pub fn document(reason: impl Into<String>) -> Self {
        Self {
            field: None,
            reason: reason.into(),
        }
    }

    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            reason: reason.into(),
        }
    }
}

fn field_prefix(field: &Option<String>) -> String {
    field.as_deref().map(|f| format!("{f}: ")).unwrap_or_default()
}
