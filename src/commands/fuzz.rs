use std::fs;

use tracing::{info, warn};

use crate::models::{Address, FuzzSummary};
use crate::services::fuzz_service::{self, InMemoryToken};
use crate::utils::DashboardError;

/// Bytes per input: an 8-byte amount followed by a 20-byte address
const DEFAULT_CHUNK_SIZE: usize = 28;
const SENDER_SUPPLY: u64 = 1_000_000_000;

/// `fuzz <input-file> [chunk-size]`
pub fn execute(args: &[&str]) -> Result<(), DashboardError> {
    let path = args.first().ok_or_else(|| {
        DashboardError::Usage("❌ Usage: fuzz <input-file> [chunk-size]".to_string())
    })?;

    let chunk_size = match args.get(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(DashboardError::Usage(format!(
                    "❌ Invalid chunk size: '{}'. Use a positive number of bytes",
                    raw
                )))
            }
        },
        None => DEFAULT_CHUNK_SIZE,
    };

    let corpus = fs::read(path)?;
    info!("🧪 Replaying {} bytes from {} in {}-byte inputs", corpus.len(), path, chunk_size);

    let mut sender = [0u8; 20];
    sender[19] = 1;
    let mut token = InMemoryToken::new(Address(sender), SENDER_SUPPLY);

    let summary = fuzz_service::fuzz_corpus(&corpus, chunk_size, &mut token);
    report(&summary);

    if token.total_supply() != Some(SENDER_SUPPLY) {
        warn!("🐛 Finding: token supply changed to {:?}", token.total_supply());
    }

    Ok(())
}

fn report(summary: &FuzzSummary) {
    info!(
        "Inputs: {} | Transferred: {} | Rejected: {} | Findings: {}",
        summary.inputs,
        summary.transferred,
        summary.rejected,
        summary.findings.len()
    );
    for finding in &summary.findings {
        warn!("  └─ {}", finding);
    }
}
