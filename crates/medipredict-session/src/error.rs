use medipredict_catalog::error::CatalogError;
use medipredict_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a prediction is already in flight")]
    AlreadySubmitting,

    #[error("'{intent}' is not available from the {view} view")]
    InvalidIntent {
        intent: &'static str,
        view: &'static str,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
