//! Test Data Builders
//!
//! Provides a builder for installment plan requests with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::Currency;
use domain_installments::{InstallmentPlanRequest, PolicyTerm, ResidualPolicy};
use rust_decimal::Decimal;

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for constructing installment plan requests
pub struct TestRequestBuilder {
    start_date: String,
    period_months: i64,
    installments_count: i64,
    annual_premium: Decimal,
    currency: Currency,
    residual_policy: ResidualPolicy,
}

impl Default for TestRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRequestBuilder {
    /// Creates a builder for an annual policy in 12 installments
    pub fn new() -> Self {
        Self {
            start_date: DateFixtures::policy_start().to_string(),
            period_months: 12,
            installments_count: 12,
            annual_premium: MoneyFixtures::usd_1200().amount(),
            currency: Currency::USD,
            residual_policy: ResidualPolicy::Keep,
        }
    }

    /// Sets the start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date.to_string();
        self
    }

    /// Sets the start date as raw text, valid or not
    pub fn with_raw_start_date(mut self, text: impl Into<String>) -> Self {
        self.start_date = text.into();
        self
    }

    /// Sets the period in months
    pub fn with_period_months(mut self, months: i64) -> Self {
        self.period_months = months;
        self
    }

    /// Sets the period from a term preset
    pub fn with_term(mut self, term: PolicyTerm) -> Self {
        self.period_months = i64::from(term.months());
        self
    }

    /// Sets the number of installments
    pub fn with_installments(mut self, count: i64) -> Self {
        self.installments_count = count;
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.annual_premium = premium;
        self
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

    /// Builds the request
    pub fn build(self) -> InstallmentPlanRequest {
        InstallmentPlanRequest::new(
            self.start_date,
            self.period_months,
            self.installments_count,
            self.annual_premium,
        )
        .with_currency(self.currency)
        .with_residual_policy(self.residual_policy)
    }
}
