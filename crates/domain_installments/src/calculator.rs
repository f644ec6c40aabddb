//! Premium fractionation
//!
//! Splits a policy period into `n` contiguous sub-periods and the premium
//! into `n` amounts.
//!
//! # Date boundaries
//!
//! Installment `k` starts `k * period_months / n` months after the start
//! date. The offset is kept as an exact ratio: whole months are added with
//! calendar arithmetic (clamping the day of month, always measured from the
//! start date so clamping never accumulates) and the fraction is turned into
//! days against the length of the following month, rounded half up. When
//! installments are about a day long, rounded boundaries that collide are
//! moved apart by a day so every installment covers at least one day. Each
//! installment ends the day before the next one starts, and the last one
//! ends the day before `start + period_months` months.
//!
//! # Amounts
//!
//! Every installment receives `round(premium / n, 2)`, rounded half away
//! from zero. The residual left by rounding is reported on the plan and,
//! depending on the [`ResidualPolicy`], may be folded back into the rows.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use core_kernel::temporal::{add_days, add_months, previous_day, MonthOffset};
use core_kernel::{Money, MoneyError};

use crate::error::InstallmentError;
use crate::plan::{InstallmentPlan, InstallmentRow};
use crate::request::{InstallmentPlanRequest, ResidualPolicy, ValidatedRequest};

/// Computes installment plans
///
/// The calculator holds no state besides its limits; it is cheap to copy
/// and safe to share between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallmentCalculator {
    max_installments: Option<u32>,
}

impl InstallmentCalculator {
    /// Creates a calculator with no upper limit on the installment count
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects requests asking for more than `max` installments
    pub fn with_max_installments(mut self, max: u32) -> Self {
        self.max_installments = Some(max);
        self
    }

    /// Returns the configured installment limit
    pub fn max_installments(&self) -> Option<u32> {
        self.max_installments
    }

    /// Computes the installment plan for a request
    ///
    /// # Errors
    ///
    /// Fails before producing any row if the start date, period, count, or
    /// premium is invalid, or if the period has fewer days than the
    /// requested installments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_installments::{InstallmentCalculator, InstallmentPlanRequest};
    /// use rust_decimal_macros::dec;
    ///
    /// let request = InstallmentPlanRequest::new("2025-01-01", 12, 12, dec!(1200.00));
    /// let plan = InstallmentCalculator::new().calculate(&request).unwrap();
    ///
    /// assert_eq!(plan.len(), 12);
    /// assert_eq!(plan.rows()[0].amount.amount(), dec!(100.00));
    /// ```
    #[instrument(
        skip(self, request),
        fields(
            start_date = %request.start_date,
            period_months = request.period_months,
            installments_count = request.installments_count,
        )
    )]
    pub fn calculate(
        &self,
        request: &InstallmentPlanRequest,
    ) -> Result<InstallmentPlan, InstallmentError> {
        let validated = request.validate()?;
        self.check_limit(&validated)?;

        let count = validated.installments_count;
        let period_days = (add_months(validated.start_date, validated.period_months)?
            - validated.start_date)
            .num_days();
        if i64::from(count) > period_days {
            return Err(InstallmentError::InvalidInstallmentCount {
                count: i64::from(count),
                reason: format!("exceeds the {period_days} days in the policy period"),
            });
        }

        let boundaries = period_boundaries(
            validated.start_date,
            validated.period_months,
            count,
        )?;
        let amounts = distribute_premium(
            validated.annual_premium,
            count,
            validated.residual_policy,
        )?;

        let mut rows = Vec::with_capacity(count as usize);
        for (index, (bounds, amount)) in boundaries.windows(2).zip(amounts).enumerate() {
            rows.push(InstallmentRow {
                number: index as u32 + 1,
                period_start: bounds[0],
                period_end: previous_day(bounds[1])?,
                amount,
            });
        }

        let plan = InstallmentPlan::new(
            rows,
            validated.annual_premium,
            validated.period_months,
            validated.residual_policy,
        );

        debug!(
            months_per_installment = %plan.months_per_installment(),
            total = %plan.total(),
            residual = %plan.residual().amount(),
            "Computed installment plan"
        );

        Ok(plan)
    }

    fn check_limit(&self, request: &ValidatedRequest) -> Result<(), InstallmentError> {
        match self.max_installments {
            Some(max) if request.installments_count > max => {
                Err(InstallmentError::InvalidInstallmentCount {
                    count: i64::from(request.installments_count),
                    reason: format!("must not exceed {max}"),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Computes an installment plan with a default calculator
pub fn compute_installments(
    request: &InstallmentPlanRequest,
) -> Result<InstallmentPlan, InstallmentError> {
    InstallmentCalculator::new().calculate(request)
}

/// Returns the `count + 1` boundary dates of the partition
///
/// Boundary `k` is the first day of installment `k + 1`; the last boundary
/// is the first day after the policy period. The caller guarantees `count`
/// does not exceed the days in the period.
fn period_boundaries(
    start_date: NaiveDate,
    period_months: u32,
    count: u32,
) -> Result<Vec<NaiveDate>, InstallmentError> {
    let mut boundaries = (0..=u64::from(count))
        .map(|k| -> Result<NaiveDate, InstallmentError> {
            let offset = MonthOffset::ratio(k * u64::from(period_months), u64::from(count))?;
            Ok(offset.apply(start_date)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Near one installment per day, two rounded boundaries can fall on the
    // same day. Push each one past its predecessor, then pull the tail back
    // so the last installments still fit before the period end.
    let last = boundaries.len() - 1;
    for k in 1..last {
        let earliest = add_days(boundaries[k - 1], 1)?;
        if boundaries[k] < earliest {
            boundaries[k] = earliest;
        }
    }
    for k in (1..last).rev() {
        let latest = previous_day(boundaries[k + 1])?;
        if boundaries[k] > latest {
            boundaries[k] = latest;
        }
    }

    Ok(boundaries)
}

/// Returns one amount per installment according to the residual policy
fn distribute_premium(
    premium: Money,
    count: u32,
    policy: ResidualPolicy,
) -> Result<Vec<Money>, InstallmentError> {
    let share = premium.split_even(count)?;
    debug!(share = %share.amount(), ?policy, "Premium share per installment");

    match policy {
        ResidualPolicy::Keep => Ok(vec![share; count as usize]),
        ResidualPolicy::AbsorbInLast => {
            let leading = share.multiply((count - 1).into())?;
            let last = exact_difference(premium, leading)?.round_to_currency();
            if last.is_negative() {
                let residual = exact_difference(premium, share.multiply(count.into())?)?;
                return Err(InstallmentError::ResidualNotAbsorbable {
                    residual: residual.amount().to_string(),
                });
            }
            let mut amounts = vec![share; count as usize - 1];
            amounts.push(last);
            Ok(amounts)
        }
        ResidualPolicy::Spread => Ok(premium.allocate(count)?),
    }
}

/// `premium - amount` without normalising the premium's decimal places
fn exact_difference(premium: Money, amount: Money) -> Result<Money, MoneyError> {
    if premium.currency() != amount.currency() {
        return Err(MoneyError::CurrencyMismatch(
            premium.currency().to_string(),
            amount.currency().to_string(),
        ));
    }
    premium
        .amount()
        .checked_sub(amount.amount())
        .map(|difference| Money::from_exact(difference, premium.currency()))
        .ok_or(MoneyError::Overflow)
}
