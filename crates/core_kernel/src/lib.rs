//! Core Kernel - Foundational types for premium fractionation
//!
//! This crate provides the building blocks used by the installment domain
//! and the HTTP interface:
//! - Money types with precise decimal arithmetic and explicit rounding
//! - Calendar helpers for policy periods and fractional month offsets

pub mod money;
pub mod temporal;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, MonthOffset, TemporalError, parse_calendar_date};
