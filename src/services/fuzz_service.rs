use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{Address, FuzzOutcome, FuzzSummary, TransferError};

/// Splits raw fuzzer bytes into typed values. Once the input runs out,
/// every consumer yields zeroes.
pub struct FuzzedDataProvider<'a> {
    data: &'a [u8],
}

impl<'a> FuzzedDataProvider<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn take(&mut self, n: usize) -> &'a [u8] {
        let data = self.data;
        let (head, tail) = data.split_at(n.min(data.len()));
        self.data = tail;
        head
    }

    /// Up to 8 little-endian bytes
    pub fn consume_number(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        let bytes = self.take(8);
        buf[..bytes.len()].copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    }

    /// 20 bytes, zero-padded
    pub fn consume_address(&mut self) -> Address {
        let mut buf = [0u8; 20];
        let bytes = self.take(20);
        buf[..bytes.len()].copy_from_slice(bytes);
        Address(buf)
    }

    pub fn remaining_bytes(&self) -> usize {
        self.data.len()
    }
}

/// The transfer entry point of a fungible token
pub trait TokenContract {
    fn transfer(&mut self, to: &Address, amount: u64) -> Result<(), TransferError>;
}

/// Balance ledger used as the fuzz target. Transfers are sent from a single
/// funded sender.
#[derive(Debug, Clone)]
pub struct InMemoryToken {
    sender: Address,
    balances: HashMap<Address, u64>,
}

impl InMemoryToken {
    pub fn new(sender: Address, supply: u64) -> Self {
        let mut balances = HashMap::new();
        balances.insert(sender, supply);
        Self { sender, balances }
    }

    pub fn balance_of(&self, account: &Address) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Sum of all balances, `None` if it no longer fits in a `u64`
    pub fn total_supply(&self) -> Option<u64> {
        self.balances
            .values()
            .try_fold(0u64, |acc, &b| acc.checked_add(b))
    }
}

impl TokenContract for InMemoryToken {
    fn transfer(&mut self, to: &Address, amount: u64) -> Result<(), TransferError> {
        if to.is_zero() {
            return Err(TransferError::ZeroAddress);
        }
        if amount == 0 {
            return Err(TransferError::ZeroAmount);
        }

        let available = self.balance_of(&self.sender);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        if *to == self.sender {
            return Ok(());
        }

        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;

        self.balances.insert(self.sender, available - amount);
        self.balances.insert(*to, credited);
        Ok(())
    }
}

/// Feed one fuzz input to the contract's transfer call and classify the result
pub fn fuzz_transfer<C: TokenContract + ?Sized>(data: &[u8], contract: &mut C) -> FuzzOutcome {
    let mut fuzz = FuzzedDataProvider::new(data);
    let amount = fuzz.consume_number();
    let recipient = fuzz.consume_address();
    if fuzz.remaining_bytes() > 0 {
        debug!("Ignoring {} trailing byte(s) of fuzz input", fuzz.remaining_bytes());
    }

    match contract.transfer(&recipient, amount) {
        Ok(()) => FuzzOutcome::Transferred { to: recipient, amount },
        Err(err) if err.is_expected() => {
            debug!("Transfer of {} to {} rejected: {}", amount, recipient, err);
            FuzzOutcome::Rejected(err)
        }
        Err(err) => {
            warn!("🐛 Finding: transfer of {} to {} failed: {}", amount, recipient, err);
            FuzzOutcome::Finding(err)
        }
    }
}

/// Replay a corpus in fixed-size chunks, one transfer per chunk
pub fn fuzz_corpus<C: TokenContract + ?Sized>(corpus: &[u8], chunk_size: usize, contract: &mut C) -> FuzzSummary {
    let mut summary = FuzzSummary::default();
    for chunk in corpus.chunks(chunk_size.max(1)) {
        summary.record(fuzz_transfer(chunk, contract));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(last: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Address(bytes)
    }

    fn input(amount: u64, to: &Address) -> Vec<u8> {
        let mut data = amount.to_le_bytes().to_vec();
        data.extend_from_slice(&to.0);
        data
    }

    #[test]
    fn test_provider_consumes_in_order() {
        let to = address(9);
        let data = input(1234, &to);
        let mut fuzz = FuzzedDataProvider::new(&data);

        assert_eq!(fuzz.consume_number(), 1234);
        assert_eq!(fuzz.consume_address(), to);
        assert_eq!(fuzz.remaining_bytes(), 0);
        assert_eq!(fuzz.consume_number(), 0);
    }

    #[test]
    fn test_provider_pads_short_input() {
        let mut fuzz = FuzzedDataProvider::new(&[0x01, 0x02]);
        assert_eq!(fuzz.consume_number(), 0x0201);
        assert!(fuzz.consume_address().is_zero());
    }

    #[test]
    fn test_valid_transfer_moves_balance() {
        let sender = address(1);
        let recipient = address(2);
        let mut token = InMemoryToken::new(sender, 1_000);

        let outcome = fuzz_transfer(&input(300, &recipient), &mut token);
        assert_eq!(outcome, FuzzOutcome::Transferred { to: recipient, amount: 300 });
        assert_eq!(token.balance_of(&sender), 700);
        assert_eq!(token.balance_of(&recipient), 300);
        assert_eq!(token.total_supply(), Some(1_000));
    }

    #[test]
    fn test_expected_rejections() {
        let mut token = InMemoryToken::new(address(1), 10);

        assert_eq!(
            fuzz_transfer(&input(5, &Address::ZERO), &mut token),
            FuzzOutcome::Rejected(TransferError::ZeroAddress)
        );
        assert_eq!(
            fuzz_transfer(&input(0, &address(2)), &mut token),
            FuzzOutcome::Rejected(TransferError::ZeroAmount)
        );
        assert_eq!(
            fuzz_transfer(&input(11, &address(2)), &mut token),
            FuzzOutcome::Rejected(TransferError::InsufficientBalance { available: 10, requested: 11 })
        );
        assert_eq!(token.total_supply(), Some(10));
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let sender = address(1);
        let mut token = InMemoryToken::new(sender, 50);
        fuzz_transfer(&input(20, &sender), &mut token);
        assert_eq!(token.balance_of(&sender), 50);
    }

    #[test]
    fn test_trailing_bytes_do_not_change_transfer() {
        let recipient = address(2);
        let mut data = input(40, &recipient);
        data.extend_from_slice(&[0xff; 5]);
        let mut token = InMemoryToken::new(address(1), 100);

        assert_eq!(
            fuzz_transfer(&data, &mut token),
            FuzzOutcome::Transferred { to: recipient, amount: 40 }
        );
    }

    struct RevertingToken;

    impl TokenContract for RevertingToken {
        fn transfer(&mut self, _to: &Address, _amount: u64) -> Result<(), TransferError> {
            Err(TransferError::Reverted("paused".to_string()))
        }
    }

    #[test]
    fn test_unexpected_errors_are_findings() {
        let outcome = fuzz_transfer(&input(1, &address(2)), &mut RevertingToken);
        assert_eq!(outcome, FuzzOutcome::Finding(TransferError::Reverted("paused".to_string())));
    }

    #[test]
    fn test_corpus_summary() {
        let mut corpus = input(100, &address(2));
        corpus.extend(input(0, &address(3)));
        corpus.extend(input(u64::MAX, &address(4)));

        let mut token = InMemoryToken::new(address(1), 500);
        let summary = fuzz_corpus(&corpus, 28, &mut token);

        assert_eq!(summary.inputs, 3);
        assert_eq!(summary.transferred, 1);
        assert_eq!(summary.rejected, 2);
        assert!(summary.findings.is_empty());
        assert_eq!(token.total_supply(), Some(500));
    }
}
