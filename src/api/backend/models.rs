use serde::Deserialize;

/// Error body some backend routes return alongside a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn reason(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }
}

/// Comprehensive error type for backend API operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other non-success HTTP statuses
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error, including timeouts
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body was not the expected JSON shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
