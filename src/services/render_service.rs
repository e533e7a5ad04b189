use crate::models::{DisplayRow, PnlStyle, TransactionRecord};
use crate::utils::{format_usd, truncate_id};

/// Label shown when a transaction has no asset attached
pub const ASSET_PLACEHOLDER: &str = "N/A";

const SHORT_ID_LEN: usize = 8;

/// Build the explorer link for a transaction hash
pub fn explorer_link(explorer_base: &str, tx_hash: &str) -> String {
    format!("{}/{}", explorer_base.trim_end_matches('/'), tx_hash)
}

/// Project one transaction into a display row
pub fn render_row(record: &TransactionRecord, explorer_base: &str) -> DisplayRow {
    DisplayRow {
        short_id: truncate_id(&record.transaction_id, SHORT_ID_LEN),
        client_id: record.client_id.clone(),
        asset_id: record
            .primary_asset()
            .unwrap_or(ASSET_PLACEHOLDER)
            .to_string(),
        initial_amount: format_usd(record.initial_amount),
        final_amount: format_usd(record.final_amount),
        profit_loss: format_usd(record.profit_loss),
        pnl_style: PnlStyle::from_profit_loss(record.profit_loss),
        status: record.status.clone(),
        explorer_url: explorer_link(explorer_base, &record.blockchain_tx_hash),
    }
}
