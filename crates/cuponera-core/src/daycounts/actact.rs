//! Actual/Actual day count convention (year-split approximation).

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual day count, year-split approximation.
///
/// When both dates fall in the same calendar year, the fraction is the
/// elapsed days divided by that year's actual length (366 for leap
/// years). Across a year boundary the interval is split into:
///
/// - the start-year portion, from `start` through December 31 inclusive,
///   over the start year's length, and
/// - the end-year portion, from January 1 through `end` inclusive, over
///   the end year's length,
///
/// and the two fractions are summed. Intermediate whole years are not
/// modelled: consecutive schedule observations never span that far, so
/// the convention is only defined for same-year or adjacent-year pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start.year() == end.year() {
            return Decimal::from(start.days_between(&end))
                / Decimal::from(start.days_in_year());
        }

        // Both portions count their closing day inclusively.
        let head_days = start.days_between(&start.end_of_year()) + 1;
        let tail_days = end.start_of_year().days_between(&end) + 1;

        Decimal::from(head_days) / Decimal::from(start.days_in_year())
            + Decimal::from(tail_days) / Decimal::from(end.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_same_year_non_leap() {
        let dc = ActAct;
        let yf = dc.year_fraction(date(2025, 1, 1), date(2025, 7, 1));
        assert_eq!(yf, dec!(181) / dec!(365));
    }

    #[test]
    fn test_same_year_leap() {
        let dc = ActAct;
        // 2024 is a leap year: 366-day basis
        let yf = dc.year_fraction(date(2024, 1, 1), date(2024, 7, 1));
        assert_eq!(yf, dec!(182) / dec!(366));
    }

    #[test]
    fn test_cross_year_split() {
        let dc = ActAct;
        // Oct 1 2024 -> Mar 1 2025
        // Head: Oct 1 through Dec 31 inclusive = 91 + 1 = 92 days / 366
        // Tail: Jan 1 through Mar 1 inclusive = 59 + 1 = 60 days / 365
        let yf = dc.year_fraction(date(2024, 10, 1), date(2025, 3, 1));
        assert_eq!(yf, dec!(92) / dec!(366) + dec!(60) / dec!(365));
    }

    #[test]
    fn test_cross_year_sums_year_portions() {
        let dc = ActAct;
        // Full Jan 1 -> Jan 1 span: head covers the entire start year
        // inclusively, tail contributes one day of the end year.
        let yf = dc.year_fraction(date(2024, 1, 1), date(2025, 1, 1));
        assert_eq!(yf, dec!(366) / dec!(366) + dec!(1) / dec!(365));
    }

    #[test]
    fn test_same_date_is_zero() {
        let dc = ActAct;
        let d = date(2025, 6, 15);
        assert_eq!(dc.year_fraction(d, d), dec!(0));
    }
}
