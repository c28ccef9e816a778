use medipredict_core::error::CoreError;
use thiserror::Error;

use crate::form::ValidationError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown field '{field_id}' for {disease}")]
    UnknownField { disease: String, field_id: String },

    #[error("'{raw}' is not a number for field '{field_id}'")]
    NotANumber { field_id: String, raw: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
