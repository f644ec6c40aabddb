//! Installment DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;
use domain_installments::{
    InstallmentError, InstallmentPlan, InstallmentPlanRequest, InstallmentRow, PolicyTerm,
    ResidualPolicy,
};

/// Body of `POST /api/v1/installments/calculate`
///
/// The period is given either as `period_months` or as a `term` code
/// (`annual`, `semiannual`, `quarterly`, `monthly`, or a month count).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalculateInstallmentsRequest {
    pub start_date: String,
    pub period_months: Option<i64>,
    pub term: Option<String>,
    pub installments_count: i64,
    pub annual_premium: Decimal,
    pub currency: Option<Currency>,
    pub residual_policy: Option<ResidualPolicy>,
}

impl CalculateInstallmentsRequest {
    /// Resolves the period and builds the domain request
    pub fn into_domain(self) -> Result<InstallmentPlanRequest, InstallmentError> {
        let term_months = self
            .term
            .as_deref()
            .map(|code| code.parse::<PolicyTerm>().map(|term| i64::from(term.months())))
            .transpose()?;

        let period_months = match (self.period_months, term_months) {
            (Some(months), Some(from_term)) if months != from_term => {
                return Err(InstallmentError::InvalidPeriod {
                    months,
                    reason: format!("does not match the {from_term} months of the term"),
                });
            }
            (Some(months), _) | (None, Some(months)) => months,
            (None, None) => {
                return Err(InstallmentError::InvalidPeriod {
                    months: 0,
                    reason: "either period_months or term is required".to_string(),
                });
            }
        };

        Ok(InstallmentPlanRequest::new(
            self.start_date,
            period_months,
            self.installments_count,
            self.annual_premium,
        )
        .with_currency(self.currency.unwrap_or_default())
        .with_residual_policy(self.residual_policy.unwrap_or_default()))
    }
}

#[derive(Debug, Serialize)]
pub struct InstallmentRowResponse {
    pub number: u32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct InstallmentPlanResponse {
    pub rows: Vec<InstallmentRowResponse>,
    pub total: Decimal,
    pub residual: Decimal,
    pub months_per_installment: Decimal,
    pub period_months: u32,
    pub currency: Currency,
    pub residual_policy: ResidualPolicy,
}

impl From<&InstallmentRow> for InstallmentRowResponse {
    fn from(row: &InstallmentRow) -> Self {
        Self {
            number: row.number,
            period_start: row.period_start,
            period_end: row.period_end,
            amount: cents(row.amount.amount()),
        }
    }
}

impl From<InstallmentPlan> for InstallmentPlanResponse {
    fn from(plan: InstallmentPlan) -> Self {
        Self {
            rows: plan.rows().iter().map(InstallmentRowResponse::from).collect(),
            total: cents(plan.total().amount()),
            residual: cents(plan.residual().amount()),
            months_per_installment: plan.months_per_installment().normalize(),
            period_months: plan.period_months(),
            currency: plan.currency(),
            residual_policy: plan.residual_policy(),
        }
    }
}

/// Pads the scale to two decimals so amounts render as `100.00`
///
/// Values with digits below the cent, such as the residual of a sub-cent
/// premium, keep them.
fn cents(amount: Decimal) -> Decimal {
    let mut amount = amount.normalize();
    if amount.scale() < 2 {
        amount.rescale(2);
    }
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(period_months: Option<i64>, term: Option<&str>) -> CalculateInstallmentsRequest {
        CalculateInstallmentsRequest {
            start_date: "2025-01-01".to_string(),
            period_months,
            term: term.map(str::to_string),
            installments_count: 4,
            annual_premium: dec!(400),
            currency: None,
            residual_policy: None,
        }
    }

    #[test]
    fn test_term_sets_period() {
        let domain = request(None, Some("semestral")).into_domain().unwrap();
        assert_eq!(domain.period_months, 6);
        assert_eq!(domain.currency, Currency::USD);
    }

    #[test]
    fn test_matching_term_and_period_accepted() {
        let domain = request(Some(12), Some("annual")).into_domain().unwrap();
        assert_eq!(domain.period_months, 12);
    }

    #[test]
    fn test_conflicting_term_and_period_rejected() {
        let result = request(Some(6), Some("annual")).into_domain();
        assert!(matches!(result, Err(InstallmentError::InvalidPeriod { months: 6, .. })));
    }

    #[test]
    fn test_missing_period_rejected() {
        let result = request(None, None).into_domain();
        assert!(matches!(result, Err(InstallmentError::InvalidPeriod { months: 0, .. })));
    }

    #[test]
    fn test_unknown_term_rejected() {
        let result = request(None, Some("biennial")).into_domain();
        assert!(matches!(result, Err(InstallmentError::UnknownTerm(_))));
    }

    #[test]
    fn test_cents_pads_scale() {
        assert_eq!(cents(dec!(100)).to_string(), "100.00");
        assert_eq!(cents(dec!(33.3300)).to_string(), "33.33");
        assert_eq!(cents(dec!(0)).to_string(), "0.00");
    }

    #[test]
    fn test_cents_keeps_sub_cent_digits() {
        assert_eq!(cents(dec!(0.004999)).to_string(), "0.004999");
        assert_eq!(cents(dec!(-0.0050)).to_string(), "-0.005");
    }
}
