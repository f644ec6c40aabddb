//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium fractionation test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference scenarios and common dates/amounts
//! - `builders`: Builder for installment plan requests
//! - `assertions`: Custom assertion helpers for plans and money
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
