//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating installment plan requests
//! that are valid by construction.

use chrono::{Duration, Months, NaiveDate};
use core_kernel::Currency;
use domain_installments::{InstallmentPlanRequest, ResidualPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::MXN),
        Just(Currency::COP),
        Just(Currency::PEN),
    ]
}

/// Strategy for generating residual policies
pub fn residual_policy_strategy() -> impl Strategy<Value = ResidualPolicy> {
    prop_oneof![
        Just(ResidualPolicy::Keep),
        Just(ResidualPolicy::AbsorbInLast),
        Just(ResidualPolicy::Spread),
    ]
}

/// Strategy for start dates between 2000 and 2040, any day of month
pub fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0i64..14_610).prop_map(move |offset| base + Duration::days(offset))
}

/// Strategy for premiums from 0.00 to 10,000,000.00 in cents
pub fn premium_strategy() -> impl Strategy<Value = Decimal> + Clone {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for premiums typed with up to six decimal places
///
/// Covers sub-cent inputs such as `0.014999`, where rounding the premium
/// before dividing would change the share.
pub fn fine_premium_strategy() -> impl Strategy<Value = Decimal> + Clone {
    (0i64..1_000_000_000_000i64).prop_map(|micros| Decimal::new(micros, 6))
}

/// Strategy for common policy periods (1 to 36 months)
pub fn period_months_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(1i64),
        Just(3i64),
        Just(6i64),
        Just(12i64),
        1i64..=36i64,
    ]
}

/// Strategy for valid requests with the default residual policy
///
/// Installment counts stay at or below 28 per month of period so every
/// installment is guaranteed at least one day.
pub fn request_strategy() -> impl Strategy<Value = InstallmentPlanRequest> {
    requests_with_premiums(premium_strategy())
}

/// Strategy for valid requests with any residual policy
///
/// Premiums start at 100.00 so the residual can always be absorbed by the
/// last installment.
pub fn request_with_policy_strategy() -> impl Strategy<Value = InstallmentPlanRequest> {
    let premiums = (10_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2));
    (requests_with_premiums(premiums), residual_policy_strategy())
        .prop_map(|(request, policy)| request.with_residual_policy(policy))
}

/// Strategy for valid requests whose premium has up to six decimal places
pub fn request_with_fine_premium_strategy() -> impl Strategy<Value = InstallmentPlanRequest> {
    requests_with_premiums(fine_premium_strategy())
}

/// Strategy for requests with one installment per day of the period, or
/// only a few days fewer
///
/// Periods run from one to three months.
pub fn dense_request_strategy() -> impl Strategy<Value = InstallmentPlanRequest> {
    (start_date_strategy(), 1u32..=3u32, 0i64..4i64).prop_map(|(start, months, slack)| {
        let days = start
            .checked_add_months(Months::new(months))
            .map(|end| (end - start).num_days())
            .unwrap_or(28);
        InstallmentPlanRequest::new(
            start.to_string(),
            i64::from(months),
            days - slack,
            Decimal::new(100_000, 2),
        )
    })
}

fn requests_with_premiums(
    premiums: impl Strategy<Value = Decimal> + Clone,
) -> impl Strategy<Value = InstallmentPlanRequest> {
    (start_date_strategy(), period_months_strategy())
        .prop_flat_map(move |(start, months)| {
            let max_count = (months * 28).min(60);
            (
                Just(start),
                Just(months),
                1i64..=max_count,
                premiums.clone(),
                currency_strategy(),
            )
        })
        .prop_map(|(start, months, count, premium, currency)| {
            InstallmentPlanRequest::new(start.to_string(), months, count, premium)
                .with_currency(currency)
        })
}
