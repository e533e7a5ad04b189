//! Transaction models

use serde::Deserialize;

/// A single decision attached to a transaction by the trading model
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Decision {
    #[serde(default, alias = "assetId")]
    pub asset_id: Option<String>,
}

/// One historical trade as returned by the backend's recent transactions endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "rnn_transaction_id", alias = "transactionId")]
    pub transaction_id: String,
    #[serde(alias = "clientId")]
    pub client_id: String,
    /// `null` and a missing key both decode to an empty list
    #[serde(
        rename = "rnn_decisions",
        alias = "decisions",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub decisions: Vec<Decision>,
    #[serde(alias = "initialAmount")]
    pub initial_amount: f64,
    #[serde(rename = "final_calculated_amount", alias = "finalAmount")]
    pub final_amount: f64,
    #[serde(alias = "profitLoss")]
    pub profit_loss: f64,
    pub status: String,
    #[serde(alias = "blockchainTxHash")]
    pub blockchain_tx_hash: String,
}

impl TransactionRecord {
    /// Asset id of the first decision, if there is one and it is not blank
    pub fn primary_asset(&self) -> Option<&str> {
        self.decisions
            .first()
            .and_then(|d| d.asset_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Decision>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Decision>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Visual treatment of the profit/loss cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlStyle {
    Positive,
    Negative,
}

impl PnlStyle {
    pub fn from_profit_loss(profit_loss: f64) -> Self {
        if profit_loss >= 0.0 {
            PnlStyle::Positive
        } else {
            PnlStyle::Negative
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PnlStyle::Positive => "#00ff88",
            PnlStyle::Negative => "#ff3860",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PnlStyle::Positive => "pnl-positive",
            PnlStyle::Negative => "pnl-negative",
        }
    }
}

/// Display-ready projection of a [`TransactionRecord`]. Values are unescaped;
/// the render target is responsible for output encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub short_id: String,
    pub client_id: String,
    pub asset_id: String,
    pub initial_amount: String,
    pub final_amount: String,
    pub profit_loss: String,
    pub pnl_style: PnlStyle,
    pub status: String,
    pub explorer_url: String,
}

/// Result of one refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshReport {
    /// The table was replaced with `rows` rows; `skipped` records failed validation
    Rendered { rows: usize, skipped: usize },
    /// Fetch failed; the table was left untouched
    Failed(String),
    /// Another cycle currently owns the table
    Busy,
}
