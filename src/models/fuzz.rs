//! Token transfer fuzzing models

use std::fmt;

/// 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Errors a token contract can raise from `transfer`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("Transfer to the zero address")]
    ZeroAddress,
    #[error("Transfer amount is zero")]
    ZeroAmount,
    #[error("Insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance { available: u64, requested: u64 },
    #[error("Recipient balance overflow")]
    BalanceOverflow,
    #[error("Transfer reverted: {0}")]
    Reverted(String),
}

impl TransferError {
    /// Validation failures a correct contract is expected to raise on bad input.
    /// Anything else is a bug in the contract under test.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            TransferError::ZeroAddress
                | TransferError::ZeroAmount
                | TransferError::InsufficientBalance { .. }
        )
    }
}

/// Classified result of one fuzz input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuzzOutcome {
    Transferred { to: Address, amount: u64 },
    Rejected(TransferError),
    Finding(TransferError),
}

/// Aggregated counts over a fuzz run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzSummary {
    pub inputs: usize,
    pub transferred: usize,
    pub rejected: usize,
    pub findings: Vec<TransferError>,
}

impl FuzzSummary {
    pub fn record(&mut self, outcome: FuzzOutcome) {
        self.inputs += 1;
        match outcome {
            FuzzOutcome::Transferred { .. } => self.transferred += 1,
            FuzzOutcome::Rejected(_) => self.rejected += 1,
            FuzzOutcome::Finding(err) => self.findings.push(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let mut bytes = [0u8; 20];
        bytes[19] = 0xab;
        assert_eq!(
            Address(bytes).to_string(),
            "0x00000000000000000000000000000000000000ab"
        );
        assert!(Address::ZERO.is_zero());
    }

    #[test]
    fn test_expected_errors() {
        assert!(TransferError::ZeroAmount.is_expected());
        assert!(TransferError::InsufficientBalance { available: 1, requested: 2 }.is_expected());
        assert!(!TransferError::BalanceOverflow.is_expected());
        assert!(!TransferError::Reverted("boom".into()).is_expected());
    }
}
