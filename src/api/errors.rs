use thiserror::Error;

/// Failure of a call to the Freeshopps backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential, or the backend rejected it.
    #[error("Authentication token not found")]
    Unauthenticated,

    /// Non-2xx response or transport failure.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Unexpected(format!("Failed to parse response: {err}"))
        } else if err.is_builder() {
            ApiError::Unexpected(format!("Failed to build request: {err}"))
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}
