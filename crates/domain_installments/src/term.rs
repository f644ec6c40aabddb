//! Policy term presets
//!
//! The policy form offers a handful of standard terms plus an "other"
//! option where the broker types the number of months.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InstallmentError;

/// Length of a policy period (vigencia)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyTerm {
    /// Twelve months
    Annual,
    /// Six months
    SemiAnnual,
    /// Three months
    Quarterly,
    /// One month
    Monthly,
    /// Custom number of months
    Other(u32),
}

impl PolicyTerm {
    /// Returns the number of months covered by the term
    pub fn months(&self) -> u32 {
        match self {
            PolicyTerm::Annual => 12,
            PolicyTerm::SemiAnnual => 6,
            PolicyTerm::Quarterly => 3,
            PolicyTerm::Monthly => 1,
            PolicyTerm::Other(months) => *months,
        }
    }

    /// Maps a month count back to a preset where one exists
    pub fn from_months(months: u32) -> Self {
        match months {
            12 => PolicyTerm::Annual,
            6 => PolicyTerm::SemiAnnual,
            3 => PolicyTerm::Quarterly,
            1 => PolicyTerm::Monthly,
            other => PolicyTerm::Other(other),
        }
    }
}

impl fmt::Display for PolicyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyTerm::Annual => write!(f, "annual"),
            PolicyTerm::SemiAnnual => write!(f, "semiannual"),
            PolicyTerm::Quarterly => write!(f, "quarterly"),
            PolicyTerm::Monthly => write!(f, "monthly"),
            PolicyTerm::Other(months) => write!(f, "{months} months"),
        }
    }
}

/// Parses the term codes used by the policy form
///
/// Both the English codes and the Spanish labels of the original form are
/// accepted. A bare number is read as a custom month count. The "other"
/// code on its own is rejected because it carries no month count.
impl FromStr for PolicyTerm {
    type Err = InstallmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        match code.as_str() {
            "annual" | "anual" => Ok(PolicyTerm::Annual),
            "semiannual" | "semi_annual" | "semestral" => Ok(PolicyTerm::SemiAnnual),
            "quarterly" | "trimestral" => Ok(PolicyTerm::Quarterly),
            "monthly" | "mensual" => Ok(PolicyTerm::Monthly),
            _ => code
                .parse::<u32>()
                .map(PolicyTerm::Other)
                .map_err(|_| InstallmentError::UnknownTerm(s.trim().to_string())),
        }
    }
}
