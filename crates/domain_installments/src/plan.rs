//! Installment plans
//!
//! A plan is the ordered set of installments produced for one request. It
//! lives only as long as the caller needs it for display or editing and is
//! never persisted by this crate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Currency, DateRange, Money, MoneyError};

use crate::error::InstallmentError;
use crate::request::ResidualPolicy;

/// A single installment (cuota)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallmentRow {
    /// 1-based sequence number
    pub number: u32,
    /// First day covered, inclusive
    pub period_start: NaiveDate,
    /// Last day covered, inclusive
    pub period_end: NaiveDate,
    /// Amount due
    pub amount: Money,
}

impl InstallmentRow {
    /// Returns the covered dates as a range
    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.period_start,
            end: self.period_end,
        }
    }

    /// Number of days covered
    pub fn days(&self) -> i64 {
        self.period().days()
    }
}

/// A fractionation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallmentPlan {
    rows: Vec<InstallmentRow>,
    annual_premium: Money,
    period_months: u32,
    residual_policy: ResidualPolicy,
}

impl InstallmentPlan {
    pub(crate) fn new(
        rows: Vec<InstallmentRow>,
        annual_premium: Money,
        period_months: u32,
        residual_policy: ResidualPolicy,
    ) -> Self {
        Self {
            rows,
            annual_premium,
            period_months,
            residual_policy,
        }
    }

    /// Returns the installments in sequence order
    pub fn rows(&self) -> &[InstallmentRow] {
        &self.rows
    }

    /// Consumes the plan, returning its rows
    pub fn into_rows(self) -> Vec<InstallmentRow> {
        self.rows
    }

    /// Returns the number of installments
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an installment by its sequence number
    pub fn row(&self, number: u32) -> Option<&InstallmentRow> {
        self.rows.iter().find(|row| row.number == number)
    }

    /// Returns the premium being fractioned
    pub fn annual_premium(&self) -> Money {
        self.annual_premium
    }

    pub fn currency(&self) -> Currency {
        self.annual_premium.currency()
    }

    pub fn period_months(&self) -> u32 {
        self.period_months
    }

    pub fn residual_policy(&self) -> ResidualPolicy {
        self.residual_policy
    }

    /// Months per installment, as shown on the form
    pub fn months_per_installment(&self) -> Decimal {
        if self.rows.is_empty() {
            return Decimal::ZERO;
        }
        Decimal::from(self.period_months) / Decimal::from(self.rows.len() as u64)
    }

    /// Sum of all installment amounts
    pub fn total(&self) -> Money {
        let sum: Decimal = self.rows.iter().map(|row| row.amount.amount()).sum();
        Money::new(sum, self.currency())
    }

    /// Premium minus the sum of installments
    ///
    /// Positive when the even split lost cents, negative when rounding up
    /// collected too much. Computed against the premium exactly as given,
    /// so a sub-cent premium leaves a sub-cent residual.
    pub fn residual(&self) -> Money {
        Money::from_exact(
            self.annual_premium.amount() - self.total().amount(),
            self.currency(),
        )
    }

    /// Dates covered from the first installment's start to the last one's end
    pub fn coverage(&self) -> Option<DateRange> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some(DateRange {
            start: first.period_start,
            end: last.period_end,
        })
    }

    /// Returns true if every installment starts the day after the previous one ends
    pub fn is_contiguous(&self) -> bool {
        self.rows
            .windows(2)
            .all(|pair| pair[0].period().is_followed_by(&pair[1].period()))
    }

    /// Overrides the amount of one installment
    ///
    /// Totals and residual are recomputed from the rows, so a manual edit
    /// shows up in [`InstallmentPlan::residual`] straight away.
    pub fn set_amount(&mut self, number: u32, amount: Money) -> Result<(), InstallmentError> {
        if amount.currency() != self.currency() {
            return Err(MoneyError::CurrencyMismatch(
                self.currency().to_string(),
                amount.currency().to_string(),
            )
            .into());
        }
        if amount.is_negative() {
            return Err(InstallmentError::InvalidPremium(format!(
                "installment {number} amount {} is negative",
                amount.amount()
            )));
        }
        let row = self.row_mut(number)?;
        row.amount = amount.round_to_currency();
        Ok(())
    }

    /// Overrides the dates of one installment
    ///
    /// Neighbouring rows are left untouched; use [`InstallmentPlan::is_contiguous`]
    /// to check the edited plan.
    pub fn set_period(&mut self, number: u32, period: DateRange) -> Result<(), InstallmentError> {
        let period = DateRange::new(period.start, period.end).map_err(|e| {
            InstallmentError::InvalidRowPeriod {
                number,
                reason: e.to_string(),
            }
        })?;
        let row = self.row_mut(number)?;
        row.period_start = period.start;
        row.period_end = period.end;
        Ok(())
    }

    fn row_mut(&mut self, number: u32) -> Result<&mut InstallmentRow, InstallmentError> {
        self.rows
            .iter_mut()
            .find(|row| row.number == number)
            .ok_or(InstallmentError::RowNotFound(number))
    }
}
