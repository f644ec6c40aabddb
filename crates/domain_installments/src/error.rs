//! Installment domain errors
//!
//! Every validation failure is reported before any row is generated, and
//! each input has its own variant so callers can point the user at the
//! offending field.

use thiserror::Error;

use core_kernel::{MoneyError, TemporalError};

/// Errors that can occur while building an installment plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallmentError {
    /// Start date does not parse to a real calendar date
    #[error("Invalid start date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Period length is zero, negative, or unrepresentable
    #[error("Invalid period of {months} months: {reason}")]
    InvalidPeriod {
        months: i64,
        reason: String,
    },

    /// Installment count is zero, negative, or above the configured limit
    #[error("Invalid installment count {count}: {reason}")]
    InvalidInstallmentCount {
        count: i64,
        reason: String,
    },

    /// Premium is negative or not a finite amount
    #[error("Invalid premium: {0}")]
    InvalidPremium(String),

    /// Unknown policy term code
    #[error("Unknown policy term '{0}'")]
    UnknownTerm(String),

    /// Date arithmetic left the supported calendar range
    #[error("Date out of range: {0}")]
    DateOutOfRange(#[from] TemporalError),

    /// The rounding residual would make the last installment negative
    #[error("Residual {residual} cannot be absorbed by the last installment")]
    ResidualNotAbsorbable {
        residual: String,
    },

    /// A manual date edit produced an inverted range
    #[error("Invalid dates for installment {number}: {reason}")]
    InvalidRowPeriod {
        number: u32,
        reason: String,
    },

    /// Row lookup on an existing plan failed
    #[error("Installment {0} not found")]
    RowNotFound(u32),

    /// Financial calculation error
    #[error("Financial error: {0}")]
    Money(#[from] MoneyError),
}

impl InstallmentError {
    /// Name of the request field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InstallmentError::InvalidDate(_) => Some("start_date"),
            InstallmentError::InvalidPeriod { .. } | InstallmentError::UnknownTerm(_) => {
                Some("period_months")
            }
            InstallmentError::InvalidInstallmentCount { .. } => Some("installments_count"),
            InstallmentError::InvalidPremium(_) => Some("annual_premium"),
            // The start date has already parsed, so the period pushed it out of range
            InstallmentError::DateOutOfRange(_) => Some("period_months"),
            InstallmentError::ResidualNotAbsorbable { .. } => Some("residual_policy"),
            InstallmentError::InvalidRowPeriod { .. }
            | InstallmentError::RowNotFound(_)
            | InstallmentError::Money(_) => None,
        }
    }

    /// Returns true for errors caused by the caller's input
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }
}
