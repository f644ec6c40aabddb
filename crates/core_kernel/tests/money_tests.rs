//! Unit tests for the Money module
//!
//! Tests cover money creation from user input, rounding to the minor unit,
//! even splits, lossless allocation, and currency handling.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::MXN);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::MXN);
    }

    #[test]
    fn test_parse_accepts_plain_decimal() {
        let m = Money::parse(" 1200.50 ", Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(1200.50));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "abc", "12,50", "NaN", "inf"] {
            let result = Money::parse(text, Currency::USD);
            assert!(
                matches!(result, Err(MoneyError::InvalidAmount(_))),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_try_from_f64_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Money::try_from_f64(value, Currency::USD),
                Err(MoneyError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_try_from_f64_accepts_finite() {
        let m = Money::try_from_f64(1200.5, Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(1200.5));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert!(!m.is_positive());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_negative_zero_is_not_negative() {
        let m = Money::new(dec!(-0.00), Currency::USD);
        assert!(!m.is_negative());
    }

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        let m = Money::new(dec!(-50.00), Currency::USD);
        assert!(m.is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        assert!(matches!(a.checked_sub(&b), Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(-70.00));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(66.67), Currency::USD);
        assert_eq!(m.multiply(dec!(2)).unwrap().amount(), dec!(133.34));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_half_away_from_zero() {
        assert_eq!(Money::new(dec!(100.125), Currency::USD).round_to_currency().amount(), dec!(100.13));
        assert_eq!(Money::new(dec!(100.135), Currency::USD).round_to_currency().amount(), dec!(100.14));
        assert_eq!(Money::new(dec!(-100.125), Currency::USD).round_to_currency().amount(), dec!(-100.13));
    }

    #[test]
    fn test_split_even_exact() {
        let m = Money::new(dec!(1200.00), Currency::USD);
        assert_eq!(m.split_even(12).unwrap().amount(), dec!(100.00));
    }

    #[test]
    fn test_split_even_rounds_down() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(m.split_even(3).unwrap().amount(), dec!(33.33));
    }

    #[test]
    fn test_split_even_rounds_up() {
        let m = Money::new(dec!(200.00), Currency::USD);
        assert_eq!(m.split_even(3).unwrap().amount(), dec!(66.67));
    }

    #[test]
    fn test_split_even_zero_parts() {
        let m = Money::new(dec!(200.00), Currency::USD);
        assert_eq!(m.split_even(0), Err(MoneyError::DivisionByZero));
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_allocate_handles_remainder() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let parts = m.allocate(3).unwrap();

        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount()).collect();
        assert_eq!(amounts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    }

    #[test]
    fn test_allocate_two_remainder_cents() {
        let m = Money::new(dec!(200.00), Currency::USD);
        let parts = m.allocate(3).unwrap();

        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount()).collect();
        assert_eq!(amounts, vec![dec!(66.67), dec!(66.67), dec!(66.66)]);
    }

    #[test]
    fn test_allocate_zero_parts_error() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert!(matches!(m.allocate(0), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_to_minor_rounds_sub_cent_amounts() {
        assert_eq!(Money::new(dec!(10.005), Currency::USD).to_minor().unwrap(), 1001);
        assert_eq!(Money::new(dec!(10.004), Currency::USD).to_minor().unwrap(), 1000);
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols_and_two_decimals() {
        let currencies = [
            Currency::USD, Currency::EUR, Currency::GBP, Currency::MXN,
            Currency::COP, Currency::PEN, Currency::BRL, Currency::ARS,
        ];

        for currency in currencies {
            assert!(!currency.symbol().is_empty());
            assert_eq!(currency.code().len(), 3);
            assert_eq!(currency.decimal_places(), 2);
        }
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }

    #[test]
    fn test_currency_json() {
        let json = serde_json::to_string(&Currency::PEN).unwrap();
        assert_eq!(json, "\"PEN\"");
        let back: Currency = serde_json::from_str("\"MXN\"").unwrap();
        assert_eq!(back, Currency::MXN);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(format!("{}", m), "$ 1234.50");
    }
}
