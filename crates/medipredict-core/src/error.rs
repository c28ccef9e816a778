use thiserror::Error;

use crate::models::disease::DiseaseType;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field '{field_id}' for {disease}")]
    UnknownField {
        disease: DiseaseType,
        field_id: String,
    },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field_id}' expects {expected}")]
    FieldType {
        field_id: String,
        expected: &'static str,
    },

    #[error("'{value}' is not an option for field '{field_id}'")]
    InvalidOption { field_id: String, value: String },

    #[error("patient data is for {actual}, not {expected}")]
    DiseaseMismatch {
        expected: DiseaseType,
        actual: DiseaseType,
    },
}
