//! Pre-built Test Fixtures
//!
//! Provides the reference fractionation scenarios and ready-to-use dates
//! and amounts. These fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_installments::InstallmentPlanRequest;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A premium that splits evenly into 12, 6, 4, 3, 2 and 1 installments
    pub fn usd_1200() -> Money {
        Money::new(dec!(1200.00), Currency::USD)
    }

    /// A premium that leaves a residual when split in 3
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A premium whose even split in 3 rounds up
    pub fn usd_200() -> Money {
        Money::new(dec!(200.00), Currency::USD)
    }

    /// A premium in a non-default currency
    pub fn mxn_15000() -> Money {
        Money::new(dec!(15000.00), Currency::MXN)
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard policy start
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// A start date on the 31st, to exercise day-of-month clamping
    pub fn month_end_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    /// A leap day start
    pub fn leap_day_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// The reference scenarios for the calculator
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Annual policy, 12 monthly installments of 100.00
    pub fn annual_monthly() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 12, 12, dec!(1200.00))
    }

    /// Annual policy paid in a single installment
    pub fn annual_single() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 12, 1, dec!(1200.00))
    }

    /// Semi-annual policy, 3 bimonthly installments of 300.00
    pub fn semiannual_three() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 6, 3, dec!(900.00))
    }

    /// Annual policy, 5 installments of 2.4 months each
    pub fn annual_five() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 12, 5, dec!(1000.00))
    }

    /// Zero installments
    pub fn zero_installments() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 12, 0, dec!(1200.00))
    }

    /// Negative premium
    pub fn negative_premium() -> InstallmentPlanRequest {
        InstallmentPlanRequest::new("2025-01-01", 12, 12, dec!(-50.00))
    }
}
