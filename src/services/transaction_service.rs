use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::api::backend::RecordSource;
use crate::models::{RefreshReport, TransactionRecord};
use crate::services::render_service;
use crate::utils::RenderTarget;

/// Decode raw backend items, dropping (and logging) the ones that do not
/// match the transaction schema. Returns the valid records and the skip count.
pub fn parse_records(items: Vec<Value>) -> (Vec<TransactionRecord>, usize) {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<TransactionRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping malformed transaction at index {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    (records, skipped)
}

/// Replace the target's rows with one row per record, in order
pub fn render_records<T>(target: &mut T, records: &[TransactionRecord], explorer_url: &str)
where
    T: RenderTarget + ?Sized,
{
    target.clear();
    for record in records {
        target.append_row(&render_service::render_row(record, explorer_url));
    }
}

/// Runs fetch-then-render cycles against one source and one render target.
///
/// The target is held for the whole cycle, so overlapping calls to
/// [`RefreshController::refresh`] never interleave writes.
pub struct RefreshController<S, T> {
    source: S,
    target: Arc<Mutex<T>>,
    explorer_url: String,
    last_success: Mutex<Option<DateTime<Utc>>>,
}

impl<S, T> RefreshController<S, T>
where
    S: RecordSource,
    T: RenderTarget,
{
    pub fn new(source: S, target: Arc<Mutex<T>>, explorer_url: &str) -> Self {
        Self {
            source,
            target,
            explorer_url: explorer_url.to_string(),
            last_success: Mutex::new(None),
        }
    }

    /// Shared handle to the render target
    pub fn target(&self) -> Arc<Mutex<T>> {
        Arc::clone(&self.target)
    }

    /// When the target was last replaced by a successful cycle. Failed and
    /// skipped cycles leave it unchanged.
    pub async fn last_success(&self) -> Option<DateTime<Utc>> {
        *self.last_success.lock().await
    }

    /// Run one refresh cycle.
    ///
    /// On any fetch failure the target keeps its previous rows; the error is
    /// logged and reported, never propagated.
    pub async fn refresh(&self) -> RefreshReport {
        let mut target = match self.target.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("Refresh already in progress, skipping");
                return RefreshReport::Busy;
            }
        };

        let items = match self.source.fetch_recent().await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to load transactions: {}", e);
                return RefreshReport::Failed(e.to_string());
            }
        };

        let (records, skipped) = parse_records(items);
        render_records(&mut *target, &records, &self.explorer_url);
        *self.last_success.lock().await = Some(Utc::now());

        info!(
            "📋 Rendered {} transaction(s){}",
            records.len(),
            if skipped > 0 { format!(", skipped {} malformed", skipped) } else { String::new() }
        );

        RefreshReport::Rendered {
            rows: records.len(),
            skipped,
        }
    }
}
