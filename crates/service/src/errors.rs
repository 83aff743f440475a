use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Word already exists.")]
    Duplicate(String),
    #[error("Word not found.")]
    NotFound(i64),
    #[error("translation failed: {0}")]
    Translation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// Lift a model error, keeping validation and uniqueness failures distinct.
    pub fn from_model(err: models::errors::ModelError, word: &str) -> Self {
        use models::errors::ModelError;
        match err {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Conflict(_) => Self::Duplicate(word.to_string()),
            other => Self::Model(other),
        }
    }
}
