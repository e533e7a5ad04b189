//! Wallet connection models

/// Outcome of a wallet connection attempt
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// A provider is present. `accounts` is empty when access was refused.
    Connected { accounts: Vec<String> },
    /// No provider was injected
    NotConnected,
}

impl WalletStatus {
    /// Status line shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            WalletStatus::Connected { .. } => "✅ Connected",
            WalletStatus::NotConnected => "❌ No wallet provider",
        }
    }
}

/// Errors raised by a wallet provider
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet request failed: {0}")]
    Request(String),
    #[error("Wallet rejected the request ({code}): {message}")]
    Rejected { code: i64, message: String },
    #[error("Malformed wallet response: {0}")]
    Malformed(String),
}
