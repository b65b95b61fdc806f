//! 30/360 day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

// =============================================================================
// 30/360 US (Bond Basis)
// =============================================================================

/// 30/360 US day count convention (Bond Basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND D1 (after rule 1) is >= 30, change D2 to 30
///
/// The end-day clamp is conditional on the start day; this is what
/// distinguishes the US variant from [`Thirty360E`].
///
/// # Formula
///
/// Days = 360 x (Y2 - Y1) + 30 x (M2 - M1) + (D2 - D1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        // Rule 1: If D1 is 31, change D1 to 30
        if d1 == 31 {
            d1 = 30;
        }

        // Rule 2: If D2 is 31 AND D1 is now >= 30, change D2 to 30
        if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// 30E/360 (Eurobond Basis)
// =============================================================================

/// 30E/360 day count convention (Eurobond Basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// Simpler than 30/360 US: the end-day clamp is unconditional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }

        if d2 == 31 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    // =========================================================================
    // 30/360 US Tests
    // =========================================================================

    #[test]
    fn test_thirty360us_full_year() {
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2025, 1, 1), date(2026, 1, 1)), 360);
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), dec!(1));
    }

    #[test]
    fn test_thirty360us_one_month() {
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2024, 1, 15), date(2024, 2, 15)), 30);
    }

    #[test]
    fn test_thirty360us_d1_31_to_30() {
        let dc = Thirty360US;

        // D1 = 30, D2 = 31 but D1 >= 30 so D2 = 30
        // Days = 30 * (3-1) + (30-30) = 60
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
    }

    #[test]
    fn test_thirty360us_d2_31_conditional() {
        let dc = Thirty360US;

        // D1 = 30, D2 = 31 -> D2 clamped to 30
        // Days = 30 * 1 + (30-30) = 30
        assert_eq!(dc.day_count(date(2025, 4, 30), date(2025, 5, 31)), 30);
    }

    #[test]
    fn test_thirty360us_d2_31_stays_31() {
        let dc = Thirty360US;

        // D1 = 15 < 30, so D2 = 31 stays
        // Days = 30 * (3-1) + (31-15) = 76
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 3, 31)), 76);
    }

    #[test]
    fn test_thirty360us_feb_end_no_adjustment() {
        let dc = Thirty360US;

        // Feb 28 is not 31, so no clamping on either side
        // Days = 30 * 1 + (31-28) = 33
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2025, 3, 31)), 33);
    }

    #[test]
    fn test_thirty360us_same_day() {
        let dc = Thirty360US;
        let d = date(2025, 6, 15);
        assert_eq!(dc.day_count(d, d), 0);
        assert_eq!(dc.year_fraction(d, d), dec!(0));
    }

    #[test]
    fn test_thirty360us_negative() {
        let dc = Thirty360US;
        // Days = 30 * (3-6) + 0 = -90
        assert_eq!(dc.day_count(date(2025, 6, 15), date(2025, 3, 15)), -90);
    }

    // =========================================================================
    // 30E/360 Tests
    // =========================================================================

    #[test]
    fn test_thirty360e_full_year() {
        let dc = Thirty360E;
        assert_eq!(dc.day_count(date(2025, 1, 1), date(2026, 1, 1)), 360);
    }

    #[test]
    fn test_thirty360e_d2_31_always_30() {
        let dc = Thirty360E;

        // D1 = 15, D2 = 30 (always adjusted)
        // Days = 30 * 2 + (30-15) = 75
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 3, 31)), 75);
    }

    #[test]
    fn test_thirty360e_vs_us_difference() {
        // The unconditional end clamp is where the variants diverge
        let start = date(2025, 1, 15);
        let end = date(2025, 3, 31);

        assert_eq!(Thirty360US.day_count(start, end), 76);
        assert_eq!(Thirty360E.day_count(start, end), 75);
    }

    #[test]
    fn test_thirty360e_both_31() {
        let dc = Thirty360E;
        // Both clamped to 30: Days = 30 * 2 + 0 = 60
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
    }
}
