use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChurrascoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown side dish: {0}")]
    UnknownSideDish(String),

    #[error("No price configured for: {0}")]
    MissingPrice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChurrascoError {
    /// Whether the failure was caused by the request itself rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChurrascoError::InvalidInput(_) | ChurrascoError::UnknownSideDish(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChurrascoError>;
