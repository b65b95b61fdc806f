//! Nominal payment day-of-month.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CuponeraError;

/// The nominal day-of-month coupons fall on, in 1..=31.
///
/// When a schedule projects this day onto a month that is too short, the
/// day is clamped to the month's last day (see `Date::from_ymd_clamped`).
///
/// # Example
///
/// ```rust
/// use cuponera_core::types::PaymentDay;
///
/// let day: PaymentDay = "31".parse().unwrap();
/// assert_eq!(day.get(), 31);
///
/// // "D/M" inputs keep only the day part
/// let day: PaymentDay = "15/6".parse().unwrap();
/// assert_eq!(day.get(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentDay(u32);

impl PaymentDay {
    /// Creates a payment day, validating the 1..=31 range.
    ///
    /// # Errors
    ///
    /// Returns `CuponeraError::InvalidPaymentDay` if the day is out of range.
    pub fn new(day: u32) -> Result<Self, CuponeraError> {
        if day >= 1 && day <= 31 {
            Ok(PaymentDay(day))
        } else {
            Err(CuponeraError::invalid_payment_day(format!(
                "day {day} outside 1..=31"
            )))
        }
    }

    /// Returns the day-of-month value.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PaymentDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PaymentDay {
    type Err = CuponeraError;

    /// Parses from a bare integer ("15") or a "D/M" string ("15/6").
    ///
    /// Only the day part of a "D/M" input is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day_part = s.trim().split('/').next().unwrap_or_default();
        let day: u32 = day_part
            .parse()
            .map_err(|_| CuponeraError::invalid_payment_day(format!("cannot parse '{s}'")))?;
        Self::new(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        assert_eq!(PaymentDay::new(1).unwrap().get(), 1);
        assert_eq!(PaymentDay::new(31).unwrap().get(), 31);
    }

    #[test]
    fn test_out_of_range() {
        assert!(PaymentDay::new(0).is_err());
        assert!(PaymentDay::new(32).is_err());
    }

    #[test]
    fn test_parse_bare_integer() {
        let day: PaymentDay = "15".parse().unwrap();
        assert_eq!(day.get(), 15);

        let day: PaymentDay = " 8 ".parse().unwrap();
        assert_eq!(day.get(), 8);
    }

    #[test]
    fn test_parse_day_month_shape() {
        let day: PaymentDay = "15/6".parse().unwrap();
        assert_eq!(day.get(), 15);

        // Month part is irrelevant, even if nonsense
        let day: PaymentDay = "31/99".parse().unwrap();
        assert_eq!(day.get(), 31);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<PaymentDay>().is_err());
        assert!("abc".parse::<PaymentDay>().is_err());
        assert!("0".parse::<PaymentDay>().is_err());
        assert!("32/1".parse::<PaymentDay>().is_err());
        assert!("-5".parse::<PaymentDay>().is_err());
    }
}
