//! kharcha-core: shared domain types for the kharcha expense tracker

pub mod account;
pub mod bank;
pub mod transaction;

pub use account::{Account, CARD_COLORS, CARD_ICONS, DEFAULT_UPI_LIMIT, NewAccount};
pub use bank::BankName;
pub use transaction::{NewTransaction, Transaction};
