//! Bank of Baroda UPI debit alerts.
//!
//! Observed shape:
//!   Rs.500.00 Dr. from A/C XXXXXX1234 and Cr. to MERCHANT@ybl.
//!   Ref:123456789012. AvlBal:Rs9500.00(2025:11:21 10:15:00)
//!
//! The embedded date is year-first, colon-separated. Some variants omit the
//! debited account.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{NA_ACCOUNT, ParsedTransaction};
use kharcha_core::BankName;

static BOB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Rs\.(?P<amt>[\d.]+)\s+Dr\.",
        r"(?:.*?from A/C\s+(?P<acct>\w+))?",
        r".*?Cr\. to\s+(?P<to>[\w@.-]+)",
        r".*?Ref:(?P<ref>\d+)",
        r".*?AvlBal:Rs[\d.]+\((?P<year>\d{4}):(?P<month>\d{2}):(?P<day>\d{2})",
    ))
    .unwrap()
});

pub fn parse(body: &str) -> Option<ParsedTransaction> {
    let caps = BOB_RE.captures(body)?;

    let amount: f64 = caps["amt"].parse().ok()?;
    if amount <= 0.0 {
        return None;
    }

    // Already in calendar order, no year expansion needed.
    let date = NaiveDate::from_ymd_opt(
        caps["year"].parse().ok()?,
        caps["month"].parse().ok()?,
        caps["day"].parse().ok()?,
    )?;

    // The sentence period after the VPA is not part of the handle.
    let receiver = caps["to"].trim_end_matches('.').trim().to_string();
    if receiver.is_empty() {
        return None;
    }

    let account_no = caps
        .name("acct")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NA_ACCOUNT.to_string());

    Some(ParsedTransaction {
        amount,
        receiver,
        reference: caps["ref"].to_string(),
        date,
        bank: BankName::Bob,
        account_no,
    })
}
