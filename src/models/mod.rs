//! Data models for the dashboard and its services
//!
//! Each model represents either data read from an external boundary
//! (backend records, wallet replies) or the output of a service operation.

pub mod chart;
pub mod fuzz;
pub mod transaction;
pub mod wallet;

// Re-export commonly used types for convenience
pub use chart::{HistogramBin, SimulationParams};
pub use fuzz::{Address, FuzzOutcome, FuzzSummary, TransferError};
pub use transaction::{DisplayRow, PnlStyle, RefreshReport, TransactionRecord};
pub use wallet::{WalletError, WalletStatus};
