//! kharcha-ingest: bank-SMS parsing engine.
//!
//! Turns free-form bank notification text into structured transaction
//! drafts. Pure functions over the message body, no I/O; one module per
//! bank template under `parsers/`.

pub mod parsers;
pub mod types;

pub use parsers::parse_sms;
pub use types::{NA_ACCOUNT, NA_REFERENCE, ParsedTransaction};
