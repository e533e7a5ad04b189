use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::WalletError;

/// An injected wallet that can be asked for account access
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

/// Wallet provider reached over Ethereum JSON-RPC
pub struct JsonRpcWalletProvider {
    http_client: HttpClient,
    rpc_url: String,
}

impl JsonRpcWalletProvider {
    const REQUEST_ACCOUNTS: &'static str = "eth_requestAccounts";

    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self, WalletError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            rpc_url: rpc_url.to_string(),
        })
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: Self::REQUEST_ACCOUNTS,
            params: Vec::new(),
        };
        debug!("POST {} ({})", self.rpc_url, Self::REQUEST_ACCOUNTS);

        let response = self.http_client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Request(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(WalletError::Request(format!("HTTP status {}", response.status())));
        }

        let reply = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| WalletError::Malformed(e.to_string()))?;

        if let Some(err) = reply.error {
            return Err(WalletError::Rejected {
                code: err.code,
                message: err.message,
            });
        }

        let result = reply
            .result
            .ok_or_else(|| WalletError::Malformed("response has neither result nor error".to_string()))?;

        serde_json::from_value::<Vec<String>>(result).map_err(|e| WalletError::Malformed(e.to_string()))
    }
}
