//! Day count conventions for accrual fraction calculations.
//!
//! Day count conventions determine how a calendar interval is converted
//! into a fraction of a year, which in turn drives discounting in the
//! yield solver.
//!
//! # Supported Conventions
//!
//! - [`Thirty360US`]: 30/360 US - conditional end-day clamp
//! - [`ActAct`]: Actual/Actual - year-split approximation
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365`]: Actual/365 Fixed
//! - [`Thirty360E`]: 30E/360 - unconditional clamp on both endpoints
//!
//! Conventions are selected at runtime by an integer wire code
//! (0=30/360 US, 1=ACT/ACT, 2=ACT/360, 3=ACT/365, 4=30E/360); unknown
//! codes fall back to 30/360 US.
//!
//! # Usage
//!
//! ```rust
//! use cuponera_core::daycounts::{DayCount, DayCountConvention, Thirty360US};
//! use cuponera_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = Date::from_ymd(2024, 2, 15).unwrap();
//!
//! let days = Thirty360US.day_count(start, end);
//! let yf = DayCountConvention::Thirty360US.fraction_of_year(start, end);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use actact::ActAct;
pub use thirty360::{Thirty360E, Thirty360US};

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two
/// dates according to specific market conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the signed fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`; callers that need the accrual
    /// contract (zero floor) should go through
    /// [`DayCountConvention::fraction_of_year`].
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// This enum provides runtime selection and maps to the integer wire
/// codes used by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// 30/360 US (code 0) - default convention
    #[default]
    Thirty360US,
    /// Actual/Actual year-split approximation (code 1)
    ActAct,
    /// Actual/360 (code 2)
    Act360,
    /// Actual/365 Fixed (code 3)
    Act365,
    /// 30E/360 European (code 4)
    Thirty360E,
}

impl DayCountConvention {
    /// Creates a convention from its integer wire code.
    ///
    /// Unknown codes default to 30/360 US.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => DayCountConvention::ActAct,
            2 => DayCountConvention::Act360,
            3 => DayCountConvention::Act365,
            4 => DayCountConvention::Thirty360E,
            0 => DayCountConvention::Thirty360US,
            _ => {
                log::debug!("unknown day count code {code}, defaulting to 30/360 US");
                DayCountConvention::Thirty360US
            }
        }
    }

    /// Returns the integer wire code for this convention.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            DayCountConvention::Thirty360US => 0,
            DayCountConvention::ActAct => 1,
            DayCountConvention::Act360 => 2,
            DayCountConvention::Act365 => 3,
            DayCountConvention::Thirty360E => 4,
        }
    }

    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
            DayCountConvention::ActAct => Box::new(ActAct),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365 => Box::new(Act365),
            DayCountConvention::Thirty360E => Box::new(Thirty360E),
        }
    }

    /// Returns the conventional name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::ActAct => "ACT/ACT",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Thirty360E => "30E/360",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360US,
            DayCountConvention::ActAct,
            DayCountConvention::Act360,
            DayCountConvention::Act365,
            DayCountConvention::Thirty360E,
        ]
    }

    /// Calculates the accrual fraction of a year between two dates.
    ///
    /// This is the contract the schedule and yield layers rely on:
    /// returns zero when `start` equals `end` or when `start` is after
    /// `end` (no negative fractions), otherwise the convention's year
    /// fraction.
    #[must_use]
    pub fn fraction_of_year(&self, start: Date, end: Date) -> Decimal {
        if end <= start {
            return Decimal::ZERO;
        }
        self.to_day_count().year_fraction(start, end)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a name.
    ///
    /// Accepts the conventional names ("ACT/360", "30E/360", ...) plus a
    /// few common aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "30/360" | "30/360 US" | "30U/360" | "BOND" => Ok(DayCountConvention::Thirty360US),
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActAct),
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACTUAL/365" | "ACT365" => Ok(DayCountConvention::Act365),
            "30E/360" | "EUROBOND" | "30E360" => Ok(DayCountConvention::Thirty360E),
            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}
