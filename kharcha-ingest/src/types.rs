//! Parser output types and the sentinels shared by all bank templates.

use chrono::NaiveDate;
use kharcha_core::{BankName, NewTransaction};
use serde::{Deserialize, Serialize};

/// Sentinel reference id for template variants that omit one.
pub const NA_REFERENCE: &str = "NA-REF";

/// Sentinel account number for template variants that omit one.
pub const NA_ACCOUNT: &str = "XXX-NA";

/// One transaction draft extracted from a single message body.
///
/// Either fully populated from a successful template match or not produced
/// at all; the parser never emits partial records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Debited amount, always positive.
    pub amount: f64,
    /// Counterparty: a VPA handle, a free-text payee, or a synthesized
    /// transfer label for templates without a distinguishable one.
    pub receiver: String,
    /// Issuer transaction reference, or [`NA_REFERENCE`].
    pub reference: String,
    /// Date embedded in the message text, normalized to a calendar date.
    /// Coarse only; the authoritative transaction time is the envelope's.
    pub date: NaiveDate,
    pub bank: BankName,
    /// Masked account identifier, or [`NA_ACCOUNT`].
    pub account_no: String,
}

impl ParsedTransaction {
    /// Attach envelope metadata to produce the persistable record. The
    /// envelope receipt time is authoritative; the in-message date has no
    /// time-of-day component.
    pub fn into_record(self, timestamp_millis: i64, raw_message: &str) -> NewTransaction {
        NewTransaction {
            amount: self.amount,
            receiver: self.receiver,
            reference: self.reference,
            date: self.date,
            bank_name: self.bank,
            account_no: self.account_no,
            timestamp: timestamp_millis,
            raw_message: raw_message.to_string(),
        }
    }
}
