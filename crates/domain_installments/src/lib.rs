//! Installment Domain - Premium Fractionation
//!
//! This crate splits a policy's premium (prima) into installments (cuotas)
//! spread over the policy period (vigencia).
//!
//! # Guarantees
//!
//! For every valid request the plan has exactly `installments_count` rows,
//! numbered from 1, the first starting on the policy start date and each
//! following one starting the day after the previous one ends. The rows
//! together cover `[start_date, start_date + period_months months)`.
//!
//! Amounts are the premium divided evenly and rounded to cents. The cents
//! lost or gained by rounding are exposed as the plan's residual and can
//! optionally be folded back in (see [`ResidualPolicy`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_installments::{compute_installments, InstallmentPlanRequest};
//!
//! let request = InstallmentPlanRequest::new("2025-01-01", 12, 5, dec!(1000.00));
//! let plan = compute_installments(&request)?;
//!
//! for row in plan.rows() {
//!     println!("{} {}..{} {}", row.number, row.period_start, row.period_end, row.amount);
//! }
//! ```

pub mod calculator;
pub mod error;
pub mod plan;
pub mod request;
pub mod term;

pub use calculator::{compute_installments, InstallmentCalculator};
pub use error::InstallmentError;
pub use plan::{InstallmentPlan, InstallmentRow};
pub use request::{InstallmentPlanRequest, ResidualPolicy, ValidatedRequest};
pub use term::PolicyTerm;
