//! Bank codes for the supported notification templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing banks with a known SMS template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankName {
    #[serde(rename = "BOB")]
    Bob,
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "RBL")]
    Rbl,
    #[serde(rename = "SBI")]
    Sbi,
}

impl BankName {
    /// Short code used in persisted records and auto-generated account names.
    pub fn code(&self) -> &'static str {
        match self {
            BankName::Bob => "BOB",
            BankName::Hdfc => "HDFC",
            BankName::Rbl => "RBL",
            BankName::Sbi => "SBI",
        }
    }
}

impl fmt::Display for BankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
