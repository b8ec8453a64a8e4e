//! Persisted transaction records derived from bank SMS notifications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bank::BankName;

/// Insert payload for one transaction derived from a single message.
/// Append-only: the sync layer inserts these and never updates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Debited amount, always positive.
    pub amount: f64,
    pub receiver: String,
    pub reference: String,
    /// Coarse calendar date parsed out of the message text.
    pub date: NaiveDate,
    pub bank_name: BankName,
    pub account_no: String,
    /// Receipt time of the SMS envelope in epoch millis. This, not `date`,
    /// is the authoritative transaction time.
    pub timestamp: i64,
    /// Verbatim original body, retained for audit.
    pub raw_message: String,
}

/// Persisted transaction with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    pub receiver: String,
    pub reference: String,
    pub date: NaiveDate,
    pub bank_name: BankName,
    pub account_no: String,
    pub timestamp: i64,
    pub raw_message: String,
}

impl NewTransaction {
    /// The owning account's identity key.
    pub fn account_key(&self) -> (BankName, &str) {
        (self.bank_name, &self.account_no)
    }
}
