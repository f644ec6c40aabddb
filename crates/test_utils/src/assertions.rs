//! Custom Test Assertions
//!
//! Provides assertion helpers for installment plans that give more
//! meaningful failure messages than standard assertions.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_installments::{InstallmentPlan, InstallmentPlanRequest};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that rows are numbered 1..=n in order
pub fn assert_plan_numbered(plan: &InstallmentPlan) {
    for (index, row) in plan.rows().iter().enumerate() {
        assert_eq!(
            row.number as usize,
            index + 1,
            "Row at position {} has number {}",
            index,
            row.number
        );
    }
}

/// Asserts that every row starts the day after the previous one ends
pub fn assert_plan_contiguous(plan: &InstallmentPlan) {
    for pair in plan.rows().windows(2) {
        assert_eq!(
            pair[0].period_end.succ_opt(),
            Some(pair[1].period_start),
            "Installment {} ends {} but installment {} starts {}",
            pair[0].number,
            pair[0].period_end,
            pair[1].number,
            pair[1].period_start
        );
    }
    for row in plan.rows() {
        assert!(
            row.period_start <= row.period_end,
            "Installment {} is inverted: {}..{}",
            row.number,
            row.period_start,
            row.period_end
        );
    }
}

/// Asserts the row spans, given as `(start, end)` pairs
pub fn assert_plan_spans(plan: &InstallmentPlan, expected: &[(NaiveDate, NaiveDate)]) {
    let actual: Vec<(NaiveDate, NaiveDate)> = plan
        .rows()
        .iter()
        .map(|row| (row.period_start, row.period_end))
        .collect();
    assert_eq!(actual, expected, "Installment spans differ");
}

/// Asserts that every row carries the same amount
pub fn assert_uniform_amounts(plan: &InstallmentPlan, expected: Decimal) {
    for row in plan.rows() {
        assert_eq!(
            row.amount.amount(),
            expected,
            "Installment {} has amount {}, expected {}",
            row.number,
            row.amount.amount(),
            expected
        );
    }
}

/// Asserts every structural guarantee a plan makes about its request
///
/// Count, numbering, start anchor, and contiguity up to the end of the
/// policy period.
pub fn assert_plan_matches_request(plan: &InstallmentPlan, request: &InstallmentPlanRequest) {
    let validated = request.validate().expect("request should be valid");

    assert_eq!(
        plan.len() as i64,
        request.installments_count,
        "Plan has {} rows for {} requested installments",
        plan.len(),
        request.installments_count
    );
    assert_plan_numbered(plan);
    assert_plan_contiguous(plan);

    let coverage = plan.coverage().expect("plan should not be empty");
    assert_eq!(coverage.start, validated.start_date, "First installment must start on the start date");

    let period_end = validated
        .start_date
        .checked_add_months(chrono::Months::new(validated.period_months))
        .and_then(|d| d.pred_opt())
        .expect("period end in range");
    assert_eq!(coverage.end, period_end, "Last installment must end with the policy period");
}

/// Asserts that the plan adds up exactly to the premium
pub fn assert_plan_sums_to_premium(plan: &InstallmentPlan) {
    assert_eq!(
        plan.total().amount(),
        plan.annual_premium().amount(),
        "Plan total {} differs from premium {}",
        plan.total().amount(),
        plan.annual_premium().amount()
    );
    assert!(plan.residual().is_zero(), "Residual should be zero, got {}", plan.residual().amount());
}
