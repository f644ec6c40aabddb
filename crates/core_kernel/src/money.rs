//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Premium shares are always rounded half away from zero to the currency's
//! minor unit, which is how amounts are displayed to brokers.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// Only currencies the brokerage writes business in are listed. All of
/// them use two minor-unit digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    MXN,
    COP,
    PEN,
    BRL,
    ARS,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::MXN => "MX$",
            Currency::COP => "COL$",
            Currency::PEN => "S/",
            Currency::BRL => "R$",
            Currency::ARS => "AR$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::MXN => "MXN",
            Currency::COP => "COP",
            Currency::PEN => "PEN",
            Currency::BRL => "BRL",
            Currency::ARS => "ARS",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally; rounding to the
/// currency's minor unit is always an explicit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates Money keeping every decimal place of `amount`
    ///
    /// Used for amounts entered by a user, which must be divided and
    /// compared exactly as typed.
    pub fn from_exact(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates Money from a floating point amount
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN, infinities, and values
    /// outside the decimal range.
    pub fn try_from_f64(value: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount(format!("{value} is not a finite number")));
        }
        Decimal::from_f64(value)
            .map(|amount| Self::new(amount, currency))
            .ok_or_else(|| MoneyError::InvalidAmount(format!("{value} is out of range")))
    }

    /// Parses an amount typed by a user, e.g. `"1200.50"`
    ///
    /// Surrounding whitespace is ignored. Anything that is not a plain
    /// decimal literal (including `NaN` and `inf`) is rejected.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, MoneyError> {
        let trimmed = text.trim();
        Decimal::from_str(trimmed)
            .map(|amount| Self::new(amount, currency))
            .map_err(|_| MoneyError::InvalidAmount(format!("'{trimmed}' is not a decimal amount")))
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to the currency's minor unit, half away from zero
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Splits the amount into `n` identical shares rounded to the minor unit
    ///
    /// The quotient is rounded once, directly from the exact decimal
    /// division, so `split_even(3)` of 100.00 is 33.33 and of 200.00 is
    /// 66.67. The shares do not necessarily add back up to the original
    /// amount; see [`Money::allocate`] for a lossless split.
    pub fn split_even(&self, n: u32) -> Result<Self, MoneyError> {
        if n == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let share = self
            .amount
            .checked_div(Decimal::from(n))
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount: share.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        })
    }

    /// Allocates the money into n parts, handling remainders
    /// The remainder is distributed among the first allocations
    pub fn allocate(&self, n: u32) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::InvalidAmount("Cannot allocate to zero parts".to_string()));
        }

        let total_minor = self.to_minor()?;

        let base_amount = total_minor.div_euclid(i64::from(n));
        let remainder = total_minor.rem_euclid(i64::from(n));

        let mut allocations = Vec::with_capacity(n as usize);
        for i in 0..i64::from(n) {
            let minor = if i < remainder {
                base_amount + 1
            } else {
                base_amount
            };
            allocations.push(Money::from_minor(minor, self.currency));
        }

        Ok(allocations)
    }

    /// Returns the amount in minor units, rounded half away from zero
    pub fn to_minor(&self) -> Result<i64, MoneyError> {
        let scale = Decimal::new(10_i64.pow(self.currency.decimal_places()), 0);
        let minor = self
            .amount
            .checked_mul(scale)
            .ok_or(MoneyError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        i64::try_from(minor.mantissa() / 10_i128.pow(minor.scale()))
            .map_err(|_| MoneyError::Overflow)
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_from_exact_keeps_all_places() {
        let m = Money::from_exact(dec!(0.014999), Currency::USD);
        assert_eq!(m.amount(), dec!(0.014999));
        assert_eq!(Money::new(dec!(0.014999), Currency::USD).amount(), dec!(0.0150));
    }

    #[test]
    fn test_split_even_of_exact_amount_rounds_once() {
        let m = Money::from_exact(dec!(0.014999), Currency::USD);
        assert_eq!(m.split_even(1).unwrap().amount(), dec!(0.01));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let eur = Money::new(dec!(100.00), Currency::EUR);

        let result = usd.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_split_even_rounds_half_away_from_zero() {
        // 0.125 would become 0.12 under banker's rounding
        let m = Money::new(dec!(0.25), Currency::USD);
        assert_eq!(m.split_even(2).unwrap().amount(), dec!(0.13));
    }

    #[test]
    fn test_money_allocation() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let parts = m.allocate(3).unwrap();

        assert_eq!(parts.len(), 3);
        let total: Decimal = parts.iter().map(|p| p.amount()).sum();
        assert_eq!(total, m.amount());
    }
}
