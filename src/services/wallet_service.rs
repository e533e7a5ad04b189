use tracing::{info, warn};

use crate::api::wallet::WalletProvider;
use crate::models::WalletStatus;

/// Report wallet status and ask the provider, if any, for account access.
///
/// Presence of a provider is what makes the wallet "connected"; a refused
/// or failed account request is logged and leaves the account list empty.
pub async fn connect_wallet(provider: Option<&dyn WalletProvider>) -> WalletStatus {
    let Some(provider) = provider else {
        info!("No wallet provider configured");
        return WalletStatus::NotConnected;
    };

    let accounts = match provider.request_accounts().await {
        Ok(accounts) => {
            info!("🔗 Wallet connected with {} account(s)", accounts.len());
            accounts
        }
        Err(e) => {
            warn!("Wallet account request failed: {}", e);
            Vec::new()
        }
    };

    WalletStatus::Connected { accounts }
}
