//! Installment plan requests
//!
//! A request carries the raw values gathered by the policy form. Nothing
//! about it is trusted until [`InstallmentPlanRequest::validate`] has turned
//! it into a [`ValidatedRequest`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_calendar_date, Currency, Money};

use crate::error::InstallmentError;
use crate::term::PolicyTerm;

/// What to do with the cents lost when the premium is split evenly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidualPolicy {
    /// Every installment gets the same rounded share; the residual is only reported
    #[default]
    Keep,
    /// The last installment is adjusted so the plan adds up to the premium
    AbsorbInLast,
    /// Leftover cents are handed out one by one from the first installment
    Spread,
}

/// Input for computing an installment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlanRequest {
    /// Policy effective date, `YYYY-MM-DD`
    pub start_date: String,
    /// Length of the policy period in months
    pub period_months: i64,
    /// Number of installments requested
    pub installments_count: i64,
    /// Premium to distribute across the installments
    pub annual_premium: Decimal,
    /// Currency of the premium
    #[serde(default)]
    pub currency: Currency,
    /// Handling of the rounding residual
    #[serde(default)]
    pub residual_policy: ResidualPolicy,
}

impl InstallmentPlanRequest {
    /// Creates a request with the default currency and residual policy
    pub fn new(
        start_date: impl Into<String>,
        period_months: i64,
        installments_count: i64,
        annual_premium: Decimal,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            period_months,
            installments_count,
            annual_premium,
            currency: Currency::default(),
            residual_policy: ResidualPolicy::default(),
        }
    }

    /// Creates a request whose period comes from a term preset
    pub fn for_term(
        start_date: NaiveDate,
        term: PolicyTerm,
        installments_count: i64,
        annual_premium: Decimal,
    ) -> Self {
        Self::new(
            start_date.to_string(),
            i64::from(term.months()),
            installments_count,
            annual_premium,
        )
    }

    /// Creates a request from a premium typed as text
    ///
    /// # Errors
    ///
    /// Returns `InstallmentError::InvalidPremium` if the text is not a
    /// decimal amount.
    pub fn with_premium_text(
        start_date: impl Into<String>,
        period_months: i64,
        installments_count: i64,
        annual_premium: &str,
    ) -> Result<Self, InstallmentError> {
        let premium = Money::parse(annual_premium, Currency::default())
            .map_err(|e| InstallmentError::InvalidPremium(e.to_string()))?;
        Ok(Self::new(start_date, period_months, installments_count, premium.amount()))
    }

    /// Creates a request from a floating point premium
    ///
    /// # Errors
    ///
    /// Returns `InstallmentError::InvalidPremium` for NaN and infinities.
    pub fn with_premium_f64(
        start_date: impl Into<String>,
        period_months: i64,
        installments_count: i64,
        annual_premium: f64,
    ) -> Result<Self, InstallmentError> {
        let premium = Money::try_from_f64(annual_premium, Currency::default())
            .map_err(|e| InstallmentError::InvalidPremium(e.to_string()))?;
        Ok(Self::new(start_date, period_months, installments_count, premium.amount()))
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the residual policy
    pub fn with_residual_policy(mut self, policy: ResidualPolicy) -> Self {
        self.residual_policy = policy;
        self
    }

    /// Validates every field, in form order, stopping at the first failure
    pub fn validate(&self) -> Result<ValidatedRequest, InstallmentError> {
        let start_date = parse_calendar_date(&self.start_date)
            .map_err(|_| InstallmentError::InvalidDate(self.start_date.trim().to_string()))?;

        let period_months = positive_u32(self.period_months).map_err(|reason| {
            InstallmentError::InvalidPeriod {
                months: self.period_months,
                reason,
            }
        })?;

        let installments_count = positive_u32(self.installments_count).map_err(|reason| {
            InstallmentError::InvalidInstallmentCount {
                count: self.installments_count,
                reason,
            }
        })?;

        let annual_premium = Money::from_exact(self.annual_premium, self.currency);
        if annual_premium.is_negative() {
            return Err(InstallmentError::InvalidPremium(format!(
                "{} is negative",
                self.annual_premium
            )));
        }

        Ok(ValidatedRequest {
            start_date,
            period_months,
            installments_count,
            annual_premium,
            residual_policy: self.residual_policy,
        })
    }
}

/// A request whose fields have all been checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub start_date: NaiveDate,
    pub period_months: u32,
    pub installments_count: u32,
    pub annual_premium: Money,
    pub residual_policy: ResidualPolicy,
}

impl ValidatedRequest {
    /// Returns the policy term for the validated period
    pub fn term(&self) -> PolicyTerm {
        PolicyTerm::from_months(self.period_months)
    }
}

fn positive_u32(value: i64) -> Result<u32, String> {
    if value <= 0 {
        return Err("must be a positive integer".to_string());
    }
    u32::try_from(value).map_err(|_| format!("must not exceed {}", u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_accepts_well_formed_request() {
        let request = InstallmentPlanRequest::new("2025-01-01", 12, 12, dec!(1200.00));
        let validated = request.validate().unwrap();

        assert_eq!(validated.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(validated.period_months, 12);
        assert_eq!(validated.installments_count, 12);
        assert_eq!(validated.term(), PolicyTerm::Annual);
    }

    #[test]
    fn test_validate_reports_first_failing_field() {
        // Both date and count are bad; the date is checked first
        let request = InstallmentPlanRequest::new("2025-02-30", 12, 0, dec!(100));
        assert_eq!(
            request.validate(),
            Err(InstallmentError::InvalidDate("2025-02-30".to_string()))
        );
    }

    #[test]
    fn test_zero_premium_is_valid() {
        let request = InstallmentPlanRequest::new("2025-01-01", 12, 4, dec!(0));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_period_above_u32_rejected() {
        let request = InstallmentPlanRequest::new("2025-01-01", i64::from(u32::MAX) + 1, 1, dec!(0));
        assert!(matches!(request.validate(), Err(InstallmentError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_residual_policy_json_names() {
        let json = serde_json::to_string(&ResidualPolicy::AbsorbInLast).unwrap();
        assert_eq!(json, "\"absorb_in_last\"");
    }
}
