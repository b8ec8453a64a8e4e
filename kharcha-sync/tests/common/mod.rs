//! Shared fakes for the sync integration tests.
//!
//! `FakeSmsSource` serves a scripted inbox with real pagination semantics
//! and counts fetch calls. `MemoryStore` backs all three persistence traits
//! with the `(bank, account_no)` unique constraint and can be told to fail
//! a specific transaction bulk insert.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kharcha_core::{Account, NewAccount, NewTransaction, Transaction};
use kharcha_sync::{
    AccountStore, RawMessage, SettingsStore, SmsFilter, SmsSource, SmsSyncService, SyncError,
    TransactionStore,
};

/// Wire a service to a scripted source, with all three stores backed by the
/// same `MemoryStore`.
#[allow(dead_code)]
pub fn service(
    source: Arc<FakeSmsSource>,
    store: Arc<MemoryStore>,
    batch_size: usize,
) -> SmsSyncService {
    SmsSyncService::new(source, store.clone(), store.clone(), store).with_batch_size(batch_size)
}

/// A parseable BOB debit body with a unique reference.
#[allow(dead_code)]
pub fn bob_body(reference: u64) -> String {
    format!(
        "Rs.150.00 Dr. from A/C XXXXXX1234 and Cr. to MERCHANT@ybl. \
         Ref:{reference:012}. AvlBal:Rs900.00(2025:11:21 10:15:00)"
    )
}

/// A message no bank template matches.
#[allow(dead_code)]
pub fn otp_body() -> String {
    "Hello, your OTP is 482913".to_string()
}

pub struct FakeSmsSource {
    messages: Vec<RawMessage>,
    fetch_calls: AtomicUsize,
    unavailable: bool,
}

impl FakeSmsSource {
    pub fn new(messages: Vec<(String, i64)>) -> Self {
        let messages = messages
            .into_iter()
            .enumerate()
            .map(|(index, (body, timestamp_millis))| RawMessage {
                body,
                timestamp_millis,
                sequence_index: index,
            })
            .collect();
        Self {
            messages,
            fetch_calls: AtomicUsize::new(0),
            unavailable: false,
        }
    }

    /// A source whose every read fails, as when the SMS permission is denied.
    #[allow(dead_code)]
    pub fn unavailable() -> Self {
        Self {
            messages: Vec::new(),
            fetch_calls: AtomicUsize::new(0),
            unavailable: true,
        }
    }

    #[allow(dead_code)]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsSource for FakeSmsSource {
    async fn list_messages(&self, filter: &SmsFilter) -> Result<Vec<RawMessage>, SyncError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(SyncError::SourceUnavailable(
                "READ_SMS permission not granted".to_string(),
            ));
        }
        Ok(self
            .messages
            .iter()
            .filter(|message| message.timestamp_millis >= filter.min_timestamp)
            .skip(filter.index_from)
            .take(filter.max_count)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    settings: HashMap<String, String>,
    transaction_inserts: usize,
}

/// In-memory store implementing all three persistence traits.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// 1-based index of the transaction bulk insert that should fail.
    fail_transaction_insert: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `nth` (1-based) transaction bulk insert fails.
    #[allow(dead_code)]
    pub fn failing_transaction_insert(nth: usize) -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            fail_transaction_insert: Some(nth),
        }
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.tables.lock().unwrap().accounts.clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.tables.lock().unwrap().transactions.clone()
    }

    #[allow(dead_code)]
    pub fn setting(&self, key: &str) -> Option<String> {
        self.tables.lock().unwrap().settings.get(key).cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Account>, SyncError> {
        Ok(self.tables.lock().unwrap().accounts.clone())
    }

    async fn create_many(&self, accounts: Vec<NewAccount>) -> Result<Vec<Account>, SyncError> {
        let mut tables = self.tables.lock().unwrap();
        let mut created = Vec::with_capacity(accounts.len());
        for account in accounts {
            let duplicate = tables.accounts.iter().chain(created.iter()).any(|existing| {
                existing.bank_name == account.bank_name
                    && existing.account_no == account.account_no
            });
            if duplicate {
                return Err(SyncError::Persistence(format!(
                    "UNIQUE constraint failed: accounts ({}, {})",
                    account.bank_name, account.account_no
                )));
            }
            created.push(Account {
                id: (tables.accounts.len() + created.len() + 1) as i64,
                name: account.name,
                bank_name: account.bank_name,
                account_no: account.account_no,
                upi_limit: account.upi_limit,
                card_color: account.card_color,
                card_icon: account.card_icon,
            });
        }
        tables.accounts.extend(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn create_many(
        &self,
        transactions: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, SyncError> {
        let mut tables = self.tables.lock().unwrap();
        tables.transaction_inserts += 1;
        if self.fail_transaction_insert == Some(tables.transaction_inserts) {
            return Err(SyncError::Persistence("disk I/O error".to_string()));
        }
        let mut created = Vec::with_capacity(transactions.len());
        for tx in transactions {
            created.push(Transaction {
                id: (tables.transactions.len() + created.len() + 1) as i64,
                amount: tx.amount,
                receiver: tx.receiver,
                reference: tx.reference,
                date: tx.date,
                bank_name: tx.bank_name,
                account_no: tx.account_no,
                timestamp: tx.timestamp,
                raw_message: tx.raw_message,
            });
        }
        tables.transactions.extend(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SyncError> {
        Ok(self.tables.lock().unwrap().settings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SyncError> {
        self.tables
            .lock()
            .unwrap()
            .settings
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
