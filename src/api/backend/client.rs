use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use super::models::{ApiError, ErrorResponse};
use tracing::{debug, warn};

/// Anything that can supply the raw "recent transactions" payload.
///
/// Elements are returned undecoded so the caller can validate each record
/// on its own and skip the bad ones.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_recent(&self) -> Result<Vec<Value>, ApiError>;
}

/// HTTP client for the trading backend
pub struct BackendClient {
    http_client: HttpClient,
    base_url: String,
}

impl BackendClient {
    const RECENT_TRANSACTIONS_PATH: &'static str = "/api/transactions/recent";

    /// Create a new backend client. Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .default_headers(Self::create_headers())
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.reason().map(str::to_string))
            .unwrap_or(body_text);

        match status_code {
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Server error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    /// GET /api/transactions/recent
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - One JSON value per transaction, in backend order
    /// * `Err(ApiError)` - Network failure, non-success status, or a body that
    ///   is not a JSON array
    pub async fn get_recent_transactions(&self) -> Result<Vec<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, Self::RECENT_TRANSACTIONS_PATH);
        debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        match body {
            Value::Array(items) => Ok(items),
            other => Err(ApiError::DeserializationError(format!(
                "Expected a JSON array of transactions, got {}",
                json_kind(&other)
            ))),
        }
    }
}

#[async_trait]
impl RecordSource for BackendClient {
    async fn fetch_recent(&self) -> Result<Vec<Value>, ApiError> {
        self.get_recent_transactions().await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
