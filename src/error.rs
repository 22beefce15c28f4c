use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Not signed in")]
    MissingIdentity,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Session storage error: {0}")]
    Session(String),
    #[error("Malformed login token: {0}")]
    Token(String),
}

impl AppError {
    /// Transport and HTTP-status failures are transient; the user may simply
    /// re-trigger the action. Everything else needs a different fix first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Status { .. })
    }
}
