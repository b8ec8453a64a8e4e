//! HDFC Bank send-money notifications.
//!
//! Observed shape (often wrapped across lines):
//!   Sent Rs.35000.00
//!   From HDFC Bank A/C x5521
//!   To JOHN DOE
//!   On 05/10/25
//!   Ref 112193812012
//!   Not You? Call 18002586161
//!
//! Date is day-first with a two-digit year. The account and reference are
//! missing from some variants.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{NA_ACCOUNT, NA_REFERENCE, ParsedTransaction};
use kharcha_core::BankName;

static HDFC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)Sent Rs\.(?P<amt>[\d.]+)",
        r".*?From HDFC(?: Bank)?(?:\s+A/[Cc]\s+(?P<acct>[\w*]+))?",
        r".*?To (?P<to>.*?)\s+On (?P<day>\d{2})/(?P<month>\d{2})/(?P<year>\d{2})",
        r"(?:.*?Ref\s+(?P<ref>\d+))?",
    ))
    .unwrap()
});

pub fn parse(body: &str) -> Option<ParsedTransaction> {
    let caps = HDFC_RE.captures(body)?;

    let amount: f64 = caps["amt"].parse().ok()?;
    if amount <= 0.0 {
        return None;
    }

    // DD/MM/YY with YY meaning 20YY.
    let year: i32 = 2000 + caps["year"].parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, caps["month"].parse().ok()?, caps["day"].parse().ok()?)?;

    let receiver = caps["to"].trim().to_string();
    if receiver.is_empty() {
        return None;
    }

    let reference = caps
        .name("ref")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NA_REFERENCE.to_string());
    let account_no = caps
        .name("acct")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NA_ACCOUNT.to_string());

    Some(ParsedTransaction {
        amount,
        receiver,
        reference,
        date,
        bank: BankName::Hdfc,
        account_no,
    })
}
