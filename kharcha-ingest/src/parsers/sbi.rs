//! SBI UPI debit notifications.
//!
//! Observed shape:
//!   Dear UPI user A/C X8596 debited by 35.0 on date 21Nov25 trf to RAPIDO
//!   SERVICES Refno 498900120021. If not u? call 1800111109. -SBI
//!
//! Date is DDMonYY with a three-letter month abbreviation and a two-digit
//! year. The amount carries no currency marker.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ParsedTransaction;
use kharcha_core::BankName;

static SBI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Dear UPI user A/C\s+(?P<acct>\w+)\s+debited by\s+(?P<amt>[\d.]+)",
        r"\s+on date\s+(?P<day>\d{2})(?P<mon>[A-Za-z]{3})(?P<year>\d{2})",
        r"\s+trf to\s+(?P<to>.+?)\s+Refno\s+(?P<ref>\d+)",
    ))
    .unwrap()
});

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}

pub fn parse(body: &str) -> Option<ParsedTransaction> {
    let caps = SBI_RE.captures(body)?;

    let amount: f64 = caps["amt"].parse().ok()?;
    if amount <= 0.0 {
        return None;
    }

    // DDMonYY with YY meaning 20YY.
    let year: i32 = 2000 + caps["year"].parse::<i32>().ok()?;
    let month = month_number(&caps["mon"])?;
    let date = NaiveDate::from_ymd_opt(year, month, caps["day"].parse().ok()?)?;

    let receiver = caps["to"].trim().to_string();
    if receiver.is_empty() {
        return None;
    }

    Some(ParsedTransaction {
        amount,
        receiver,
        reference: caps["ref"].to_string(),
        date,
        bank: BankName::Sbi,
        account_no: caps["acct"].to_string(),
    })
}
