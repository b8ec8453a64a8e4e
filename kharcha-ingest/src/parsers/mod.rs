//! Per-bank template registry.
//!
//! Each bank is one module exposing `parse(body) -> Option<ParsedTransaction>`
//! that both recognizes the bank's notification shape and extracts the typed
//! fields. The registry is an ordered list applied in a fixed order; the
//! first template that matches wins. Templates are bank-specific and should
//! not overlap, but first-match-wins stays the tie-break if one ever does.
//!
//! Adding a bank means adding one module and one registry entry.

pub mod bob;
pub mod hdfc;
pub mod rbl;
pub mod sbi;

use crate::types::ParsedTransaction;
use kharcha_core::BankName;

type TemplateFn = fn(&str) -> Option<ParsedTransaction>;

/// Known templates, in match order.
const TEMPLATES: &[(BankName, TemplateFn)] = &[
    (BankName::Bob, bob::parse),
    (BankName::Hdfc, hdfc::parse),
    (BankName::Rbl, rbl::parse),
    (BankName::Sbi, sbi::parse),
];

/// Extract a transaction draft from one message body.
///
/// Returns `None` for anything that is not a recognized bank notification;
/// a non-match is not an error, the message is simply not financial.
pub fn parse_sms(body: &str) -> Option<ParsedTransaction> {
    TEMPLATES.iter().find_map(|(_, template)| template(body))
}
