//! RBL Bank UPI debit notifications.
//!
//! Observed shape:
//!   Your a/c XX5678 is debited for Rs.10000.00 on 21-11-25 and credited to
//!   a/c XX9130 (UPI Ref no 530913092011). Call 18001219050 if not done by you
//!
//! Date is day-first, dash-separated, two-digit year. The message names no
//! payee, only another masked account, so the receiver is a fixed transfer
//! label.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ParsedTransaction;
use kharcha_core::BankName;

static RBL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Your a/c\s+(?P<acct>\w+)\s+is debited for Rs\.(?P<amt>[\d.]+)",
        r"\s+on\s+(?P<day>\d{2})-(?P<month>\d{2})-(?P<year>\d{2})",
        r".*?\(UPI Ref(?:\s+no)?\.?\s*(?P<ref>\d+)",
    ))
    .unwrap()
});

pub fn parse(body: &str) -> Option<ParsedTransaction> {
    let caps = RBL_RE.captures(body)?;

    let amount: f64 = caps["amt"].parse().ok()?;
    if amount <= 0.0 {
        return None;
    }

    // DD-MM-YY with YY meaning 20YY.
    let year: i32 = 2000 + caps["year"].parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, caps["month"].parse().ok()?, caps["day"].parse().ok()?)?;

    Some(ParsedTransaction {
        amount,
        // Generic UPI debit with no distinguishable counterparty.
        receiver: "UPI Transfer (RBL)".to_string(),
        reference: caps["ref"].to_string(),
        date,
        bank: BankName::Rbl,
        account_no: caps["acct"].to_string(),
    })
}
