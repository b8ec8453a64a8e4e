//! Persistence collaborators consumed by the sync service.
//!
//! The real store lives in the surrounding app; the sync service only needs
//! bulk insert and query operations, expressed as object-safe async traits.

use async_trait::async_trait;
use kharcha_core::{Account, NewAccount, NewTransaction, Transaction};

use crate::error::SyncError;

/// Account persistence. The store enforces a unique constraint on
/// `(bank_name, account_no)`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Account>, SyncError>;

    /// Bulk-insert new accounts, returning them with assigned ids.
    async fn create_many(&self, accounts: Vec<NewAccount>) -> Result<Vec<Account>, SyncError>;
}

/// Transaction persistence. Append-only from the sync service's point of
/// view: inserts only, never updates or deletes.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Bulk-insert transactions in the given order, returning them with
    /// assigned ids.
    async fn create_many(
        &self,
        transactions: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, SyncError>;
}

/// Generic string key/value settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SyncError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), SyncError>;
}
