use thiserror::Error;

#[derive(Debug, Error)]
pub enum BarbellError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BarbellError>;
