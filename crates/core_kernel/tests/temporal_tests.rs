//! Unit tests for the Temporal module
//!
//! Tests cover date parsing, calendar month arithmetic, fractional month
//! offsets, and inclusive date ranges.

use chrono::NaiveDate;
use core_kernel::temporal::{add_months, previous_day, DateRange, MonthOffset, TemporalError};
use core_kernel::parse_calendar_date;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_parses_iso_date() {
        assert_eq!(parse_calendar_date("2025-01-01").unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_calendar_date(" 2024-02-29\n").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_rejects_non_leap_february_29() {
        assert_eq!(
            parse_calendar_date("2025-02-29"),
            Err(TemporalError::InvalidDate("2025-02-29".to_string()))
        );
    }

    #[test]
    fn test_rejects_timestamps_and_empty_input() {
        for text in ["", "2025-01-01T00:00:00Z", "not a date", "2025-13-01"] {
            assert!(matches!(parse_calendar_date(text), Err(TemporalError::InvalidDate(_))));
        }
    }
}

mod month_arithmetic {
    use super::*;

    #[test]
    fn test_add_zero_months_is_identity() {
        assert_eq!(add_months(date(2025, 5, 17), 0).unwrap(), date(2025, 5, 17));
    }

    #[test]
    fn test_add_months_crosses_year() {
        assert_eq!(add_months(date(2025, 11, 15), 3).unwrap(), date(2026, 2, 15));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(matches!(add_months(NaiveDate::MAX, 1), Err(TemporalError::OutOfRange(_))));
    }

    #[test]
    fn test_previous_day_crosses_month() {
        assert_eq!(previous_day(date(2025, 3, 1)).unwrap(), date(2025, 2, 28));
    }
}

mod month_offsets {
    use super::*;

    #[test]
    fn test_zero_denominator_rejected() {
        assert_eq!(MonthOffset::ratio(1, 0), Err(TemporalError::ZeroDenominator));
    }

    #[test]
    fn test_ratio_splits_whole_and_fraction() {
        let offset = MonthOffset::ratio(48, 10).unwrap();
        assert_eq!(offset.whole_months(), 4);
        assert!(!offset.is_whole());
    }

    #[test]
    fn test_whole_offset_equals_calendar_addition() {
        let start = date(2025, 1, 31);
        assert_eq!(MonthOffset::whole(1).apply(start).unwrap(), date(2025, 2, 28));
    }

    #[test]
    fn test_fraction_rounds_half_up() {
        // 0.5 of April (30 days) is exactly 15 days
        let offset = MonthOffset::ratio(1, 2).unwrap();
        assert_eq!(offset.apply(date(2025, 4, 1)).unwrap(), date(2025, 4, 16));
        // 0.5 of May (31 days) is 15.5 -> 16 days
        assert_eq!(offset.apply(date(2025, 5, 1)).unwrap(), date(2025, 5, 17));
    }

    #[test]
    fn test_fraction_measured_from_original_day_of_month() {
        // Jan 31 + 1 month = Feb 28; the next month is Mar 31, 31 days later
        let offset = MonthOffset::ratio(3, 2).unwrap();
        assert_eq!(offset.apply(date(2025, 1, 31)).unwrap(), date(2025, 3, 16));
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let start = date(2025, 1, 1);
        let mut previous = start;
        for k in 0..=24u64 {
            let current = MonthOffset::ratio(k * 12, 24).unwrap().apply(start).unwrap();
            assert!(current >= previous, "offset {} went backwards", k);
            previous = current;
        }
        assert_eq!(previous, date(2026, 1, 1));
    }
}

mod date_range {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = DateRange::new(date(2025, 2, 1), date(2025, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2025, 2, 1), date(2025, 2, 1)).unwrap();
        assert_eq!(range.days(), 1);
        assert!(range.contains(date(2025, 2, 1)));
    }

    #[test]
    fn test_half_open_rejects_empty_range() {
        let result = DateRange::half_open(date(2025, 2, 1), date(2025, 2, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_is_followed_by() {
        let january = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        let february = DateRange::new(date(2025, 2, 1), date(2025, 2, 28)).unwrap();
        let march = DateRange::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();

        assert!(january.is_followed_by(&february));
        assert!(!january.is_followed_by(&march));
        assert!(!february.is_followed_by(&january));
    }

    #[test]
    fn test_serializes_as_iso_dates() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["start"], "2025-01-01");
        assert_eq!(json["end"], "2025-01-31");
    }
}
