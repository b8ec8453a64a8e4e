//! The sync orchestrator.
//!
//! Pages through the inbox starting at the persisted high-water-mark,
//! parses every message, resolves owning accounts, and commits each batch's
//! transactions in one bulk insert. The unit of resumability is the batch
//! boundary: a failed batch never advances the offset or the cursor, so the
//! next run retries the same range. Re-running over an already-committed
//! range duplicates transactions (content-level dedup is not attempted);
//! correctness rests entirely on the offset/cursor bookkeeping.

use std::collections::HashSet;
use std::sync::Arc;

use kharcha_core::{BankName, NewAccount, NewTransaction};
use kharcha_ingest::parse_sms;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cursor;
use crate::error::SyncError;
use crate::source::{SmsFilter, SmsSource};
use crate::store::{AccountStore, SettingsStore, TransactionStore};

/// Messages fetched per page from the device store.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Counters reported to the caller after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Transactions persisted by this run.
    pub new_transactions: usize,
    /// Accounts auto-created by this run.
    pub new_accounts: usize,
    /// Raw inbox messages read, matching or not.
    pub raw_messages: usize,
}

/// Coordinates the message source, the parser, and the stores.
///
/// Batches are strictly sequential: batch N's account resolution must see
/// accounts created by batch N-1, so nothing is pipelined.
pub struct SmsSyncService {
    source: Arc<dyn SmsSource>,
    accounts: Arc<dyn AccountStore>,
    transactions: Arc<dyn TransactionStore>,
    settings: Arc<dyn SettingsStore>,
    batch_size: usize,
    /// Serializes runs. Two concurrent runs would double-process the same
    /// offset range.
    run_guard: Mutex<()>,
}

impl SmsSyncService {
    pub fn new(
        source: Arc<dyn SmsSource>,
        accounts: Arc<dyn AccountStore>,
        transactions: Arc<dyn TransactionStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            source,
            accounts,
            transactions,
            settings,
            batch_size: DEFAULT_BATCH_SIZE,
            run_guard: Mutex::new(()),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Run a full sync from the persisted cursor, advancing it on success.
    ///
    /// The cursor is advanced to the highest receipt timestamp actually
    /// observed, plus one -- never to "now", which could skip messages that
    /// arrive late with an earlier server timestamp. A run that observed no
    /// messages leaves the cursor untouched.
    pub async fn sync(&self) -> Result<SyncReport, SyncError> {
        let _run = self.run_guard.lock().await;

        let since = cursor::load(self.settings.as_ref()).await?;
        info!(since, "starting sms sync");
        let (report, max_seen) = self.run(since).await?;

        if let Some(max_timestamp) = max_seen {
            cursor::store(self.settings.as_ref(), max_timestamp + 1).await?;
        }

        info!(
            new_transactions = report.new_transactions,
            new_accounts = report.new_accounts,
            raw_messages = report.raw_messages,
            "sms sync complete"
        );
        Ok(report)
    }

    /// Run a sync over messages at or after `since` without touching the
    /// persisted cursor. Useful for one-off backfills.
    pub async fn sync_since(&self, since: i64) -> Result<SyncReport, SyncError> {
        let _run = self.run_guard.lock().await;
        Ok(self.run(since).await?.0)
    }

    async fn run(&self, since: i64) -> Result<(SyncReport, Option<i64>), SyncError> {
        let mut report = SyncReport::default();
        let mut index_from = 0usize;
        let mut max_seen: Option<i64> = None;

        loop {
            info!(index_from, "fetching sms batch");
            let batch = self
                .source
                .list_messages(&SmsFilter {
                    min_timestamp: since,
                    max_count: self.batch_size,
                    index_from,
                })
                .await?;

            if batch.is_empty() {
                debug!("no more messages to read");
                break;
            }

            let raw_count = batch.len();
            for message in &batch {
                max_seen = Some(match max_seen {
                    Some(seen) => seen.max(message.timestamp_millis),
                    None => message.timestamp_millis,
                });
            }

            let extracted: Vec<NewTransaction> = batch
                .iter()
                .filter_map(|message| {
                    parse_sms(&message.body)
                        .map(|parsed| parsed.into_record(message.timestamp_millis, &message.body))
                })
                .collect();
            debug!(raw = raw_count, parsed = extracted.len(), "parsed batch");

            if !extracted.is_empty() {
                report.new_accounts += self.resolve_accounts(&extracted).await?;
                let inserted = self.transactions.create_many(extracted).await?;
                info!(count = inserted.len(), "inserted transactions for batch");
                report.new_transactions += inserted.len();
            }

            // Advance by the raw message count, not the parsed count.
            // Anything else either reprocesses non-matching messages forever
            // or silently skips matching ones.
            index_from += raw_count;
            report.raw_messages += raw_count;

            // A short batch is the last batch.
            if raw_count < self.batch_size {
                break;
            }
        }

        Ok((report, max_seen))
    }

    /// Create accounts for `(bank, account_no)` pairs not seen before,
    /// returning how many were created. Existing accounts are re-read every
    /// batch so pairs created by the previous batch are detected.
    async fn resolve_accounts(&self, extracted: &[NewTransaction]) -> Result<usize, SyncError> {
        let existing = self.accounts.find_all().await?;
        let known: HashSet<(BankName, String)> = existing
            .iter()
            .map(|account| (account.bank_name, account.account_no.clone()))
            .collect();

        let mut pending: HashSet<(BankName, String)> = HashSet::new();
        let mut new_accounts: Vec<NewAccount> = Vec::new();
        // Palette colors cycle by overall creation order.
        let mut color_index = existing.len();

        for tx in extracted {
            let key = (tx.bank_name, tx.account_no.clone());
            if known.contains(&key) || !pending.insert(key) {
                continue;
            }
            new_accounts.push(NewAccount::auto_create(tx.bank_name, &tx.account_no, color_index));
            color_index += 1;
        }

        if new_accounts.is_empty() {
            return Ok(0);
        }

        let created = self.accounts.create_many(new_accounts).await?;
        info!(count = created.len(), "auto-created accounts");
        Ok(created.len())
    }
}
