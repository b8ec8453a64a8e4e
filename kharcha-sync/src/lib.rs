//! kharcha-sync: incremental SMS-to-transaction synchronization.
//!
//! Pages through a device message store from a persisted high-water-mark,
//! runs every message through the bank-SMS parser, auto-creates owning
//! accounts, and bulk-inserts new transactions one batch at a time.

pub mod cursor;
pub mod error;
pub mod source;
pub mod store;
pub mod sync;

pub use error::SyncError;
pub use source::{RawMessage, SmsFilter, SmsSource};
pub use store::{AccountStore, SettingsStore, TransactionStore};
pub use sync::{DEFAULT_BATCH_SIZE, SmsSyncService, SyncReport};
