use thiserror::Error;

/// Failure taxonomy shared by every market operation.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("{0}")]
    NotFound(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid data structure: {0}")]
    MalformedResponse(String),
    #[error("Insufficient data: need at least {needed} price points, got {available}")]
    InsufficientData { needed: usize, available: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;

impl CryptoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CryptoError::NotFound(_))
    }
}

impl From<reqwest::Error> for CryptoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CryptoError::MalformedResponse(err.to_string())
        } else {
            CryptoError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CryptoError {
    fn from(err: serde_json::Error) -> Self {
        CryptoError::MalformedResponse(err.to_string())
    }
}
