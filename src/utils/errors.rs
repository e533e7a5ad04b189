use crate::api::backend::ApiError;

/// Top-level error returned by command handlers
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// An environment variable was present but unusable
    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong command-line usage
    #[error("{0}")]
    Usage(String),
}
