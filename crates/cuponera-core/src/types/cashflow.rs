//! Dated cash flow entries for yield calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated, signed cash flow.
///
/// By convention the investment outflow at the purchase date is negative
/// and subsequent coupon inflows are positive. Amounts are plain `f64`
/// values: the surrounding application layer has already applied
/// amortization and index scaling before flows reach the solver.
///
/// # Example
///
/// ```rust
/// use cuponera_core::types::{CashFlow, Date};
///
/// let purchase = CashFlow::new(Date::from_ymd(2024, 1, 15).unwrap(), -1000.0);
/// assert!(purchase.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date.
    pub date: Date,
    /// Signed amount (outflows negative).
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Returns true if this is an outflow (negative amount).
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+.4}", self.date, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_helpers() {
        let date = Date::from_ymd(2024, 1, 15).unwrap();
        assert!(CashFlow::new(date, -1000.0).is_outflow());
        assert!(!CashFlow::new(date, 50.0).is_outflow());
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::new(Date::from_ymd(2024, 1, 15).unwrap(), -1000.0);
        assert_eq!(format!("{cf}"), "2024-01-15 -1000.0000");
    }
}
