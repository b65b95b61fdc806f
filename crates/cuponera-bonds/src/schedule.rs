//! Coupon schedule generation.
//!
//! The generator projects a nominal payment day-of-month onto concrete
//! months, stepping by the periodicity. Two modes exist:
//!
//! - *Forward*: without a redemption date, schedule from the coupon
//!   current as of the purchase date out to a 10-year horizon.
//! - *Backward*: with a redemption date, anchor the final coupon at the
//!   redemption month and walk back towards the issue date.
//!
//! Every date in a schedule carries the clamped payment day for its own
//! month; days that do not exist (the 31st of April) roll back to the
//! month's last day.
//!
//! # Example
//!
//! ```rust
//! use cuponera_bonds::schedule::{CouponSchedule, ScheduleParams};
//! use cuponera_core::types::{Date, PaymentDay, Periodicity};
//!
//! let params = ScheduleParams::new(
//!     Date::from_ymd(2024, 1, 31).unwrap(),
//!     PaymentDay::new(31).unwrap(),
//!     Periodicity::Monthly,
//!     Date::from_ymd(2024, 1, 31).unwrap(),
//! );
//!
//! let schedule = CouponSchedule::generate(&params).unwrap();
//! // February clamps to the leap day
//! assert_eq!(schedule.dates()[0], Date::from_ymd(2024, 1, 31).unwrap());
//! assert_eq!(schedule.dates()[1], Date::from_ymd(2024, 2, 29).unwrap());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cuponera_core::types::{Date, PaymentDay, Periodicity};

use crate::error::{BondError, BondResult};

/// Safety horizon: no coupon is generated past issue + 10 years.
pub const HORIZON_YEARS: i32 = 10;

/// Loop-termination guarantee: no walk takes more than 120 steps.
pub const MAX_STEPS: u32 = 120;

/// Inputs for schedule generation.
///
/// Construction from typed values cannot fail; [`ScheduleParams::parse`]
/// is the validating entry point for raw string inputs and reports
/// missing or unparsable fields as [`BondError::InvalidInput`]. Callers
/// that want the legacy silent-default behavior use
/// [`generate_or_empty`] / [`current_coupon_number_or_default`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// The note's issue date.
    pub issue_date: Date,
    /// Nominal day-of-month coupons fall on.
    pub payment_day: PaymentDay,
    /// Months between successive coupons.
    pub periodicity: Periodicity,
    /// Purchase (settlement) date; coupons before it do not accrue to
    /// the buyer.
    pub purchase_date: Date,
    /// Redemption date; when present the schedule is generated backward
    /// from it.
    pub redemption_date: Option<Date>,
}

impl ScheduleParams {
    /// Creates schedule parameters for forward generation.
    #[must_use]
    pub fn new(
        issue_date: Date,
        payment_day: PaymentDay,
        periodicity: Periodicity,
        purchase_date: Date,
    ) -> Self {
        Self {
            issue_date,
            payment_day,
            periodicity,
            purchase_date,
            redemption_date: None,
        }
    }

    /// Sets the redemption date, switching generation to backward mode.
    #[must_use]
    pub fn with_redemption(mut self, redemption_date: Date) -> Self {
        self.redemption_date = Some(redemption_date);
        self
    }

    /// Parses schedule parameters from raw string inputs.
    ///
    /// Dates are ISO 8601 (YYYY-MM-DD); the payment day is a bare
    /// integer or a "D/M" string; periodicity is one of the Spanish
    /// market names. An empty or whitespace redemption string counts as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidInput` naming the first field that
    /// failed to parse.
    pub fn parse(
        issue_date: &str,
        payment_day: &str,
        periodicity: &str,
        purchase_date: &str,
        redemption_date: Option<&str>,
    ) -> BondResult<Self> {
        let issue = Date::parse(issue_date)
            .map_err(|e| BondError::invalid_input(format!("issue date: {e}")))?;
        let day = PaymentDay::from_str(payment_day)
            .map_err(|e| BondError::invalid_input(format!("payment day: {e}")))?;
        let periodicity = Periodicity::from_str(periodicity)
            .map_err(|e| BondError::invalid_input(format!("periodicity: {e}")))?;
        let purchase = Date::parse(purchase_date)
            .map_err(|e| BondError::invalid_input(format!("purchase date: {e}")))?;

        let redemption = match redemption_date {
            Some(s) if !s.trim().is_empty() => Some(
                Date::parse(s)
                    .map_err(|e| BondError::invalid_input(format!("redemption date: {e}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            issue_date: issue,
            payment_day: day,
            periodicity,
            purchase_date: purchase,
            redemption_date: redemption,
        })
    }

    /// True when a backward-mode coupon on `date` accrues to the buyer.
    ///
    /// When the purchase date equals the issue date only coupons strictly
    /// after it count, since nothing can have accrued before issuance.
    /// Forward mode does not apply this rule; it anchors at the first
    /// payment date, which is never before the issue date to begin with.
    fn accrues(&self, date: Date) -> bool {
        if self.purchase_date == self.issue_date {
            date > self.purchase_date
        } else {
            date >= self.purchase_date
        }
    }
}

/// Projects the payment day onto a month, clamping at the month's end.
fn clamp_to_month(year: i32, month: u32, day: PaymentDay) -> BondResult<Date> {
    Ok(Date::from_ymd_clamped(year, month, day.get())?)
}

/// Steps a schedule date by whole months, re-clamping the payment day
/// onto the target month.
///
/// Stepping from an already-clamped date (Feb 29 with payment day 31)
/// must recover the nominal day, so the target day always comes from the
/// payment day, never from the date being stepped.
fn step_clamped(date: Date, months: i32, day: PaymentDay) -> BondResult<Date> {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months;
    clamp_to_month(
        total_months.div_euclid(12),
        (total_months.rem_euclid(12) + 1) as u32,
        day,
    )
}

/// Returns the first coupon date on or after the issue date.
///
/// The payment day is clamped into the issue month; if that lands before
/// the issue date the first payment moves to the following month.
pub fn first_payment_date(issue_date: Date, payment_day: PaymentDay) -> BondResult<Date> {
    let candidate = clamp_to_month(issue_date.year(), issue_date.month(), payment_day)?;
    if candidate >= issue_date {
        Ok(candidate)
    } else {
        step_clamped(candidate, 1, payment_day)
    }
}

/// Returns the 1-based number of the coupon current as of the purchase
/// date.
///
/// Counts periods from the first payment date until the running date
/// reaches the purchase date or exceeds the 10-year horizon.
pub fn current_coupon_number(
    issue_date: Date,
    payment_day: PaymentDay,
    periodicity: Periodicity,
    purchase_date: Date,
) -> BondResult<u32> {
    let horizon = issue_date.add_years(HORIZON_YEARS)?;
    let months = periodicity.months_per_period() as i32;

    let mut date = first_payment_date(issue_date, payment_day)?;
    let mut number = 1u32;

    while date < purchase_date && date <= horizon {
        date = step_clamped(date, months, payment_day)?;
        number += 1;
    }

    Ok(number)
}

/// String-input variant of [`current_coupon_number`] with the legacy
/// safe default: any missing or unparsable input yields coupon number 1.
#[must_use]
pub fn current_coupon_number_or_default(
    issue_date: &str,
    payment_day: &str,
    periodicity: &str,
    purchase_date: &str,
) -> u32 {
    ScheduleParams::parse(issue_date, payment_day, periodicity, purchase_date, None)
        .and_then(|p| {
            current_coupon_number(p.issue_date, p.payment_day, p.periodicity, p.purchase_date)
        })
        .unwrap_or(1)
}

/// String-input variant of [`CouponSchedule::generate`] with the legacy
/// behavior: any missing or unparsable input yields an empty sequence.
#[must_use]
pub fn generate_or_empty(
    issue_date: &str,
    payment_day: &str,
    periodicity: &str,
    purchase_date: &str,
    redemption_date: Option<&str>,
) -> Vec<Date> {
    ScheduleParams::parse(
        issue_date,
        payment_day,
        periodicity,
        purchase_date,
        redemption_date,
    )
    .and_then(|p| CouponSchedule::generate(&p))
    .map(CouponSchedule::into_dates)
    .unwrap_or_default()
}

/// An ordered sequence of coupon payment dates.
///
/// Always strictly increasing with no duplicates; every date carries the
/// clamped payment day for its own month. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponSchedule {
    dates: Vec<Date>,
}

impl CouponSchedule {
    /// Generates the coupon schedule for the given parameters.
    ///
    /// Forward mode (no redemption date) schedules from the coupon
    /// current as of the purchase date out to the 10-year horizon;
    /// backward mode anchors the final coupon at the redemption date and
    /// walks back to the issue date.
    pub fn generate(params: &ScheduleParams) -> BondResult<Self> {
        match params.redemption_date {
            Some(redemption) => Self::generate_backward(params, redemption),
            None => Self::generate_forward(params),
        }
    }

    /// Returns the coupon dates, ascending.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Consumes the schedule, returning its dates.
    #[must_use]
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }

    /// Returns true if the schedule has no coupons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Generates forward from the coupon current as of the purchase date.
    fn generate_forward(params: &ScheduleParams) -> BondResult<Self> {
        let months = params.periodicity.months_per_period() as i32;
        let horizon = params.issue_date.add_years(HORIZON_YEARS)?;

        // Locate the current coupon: the earliest generated date on or
        // after the purchase date
        let mut current = first_payment_date(params.issue_date, params.payment_day)?;
        let mut steps = 0u32;
        while current < params.purchase_date && current <= horizon && steps < MAX_STEPS {
            current = step_clamped(current, months, params.payment_day)?;
            steps += 1;
        }

        let mut dates = Vec::new();
        let mut date = current;
        let mut steps = 0u32;
        while date <= horizon && steps < MAX_STEPS {
            if dates.last() != Some(&date) {
                dates.push(date);
            }
            date = step_clamped(date, months, params.payment_day)?;
            steps += 1;
        }

        Ok(Self { dates })
    }

    /// Generates backward from the redemption date.
    fn generate_backward(params: &ScheduleParams, redemption: Date) -> BondResult<Self> {
        let months = params.periodicity.months_per_period() as i32;
        let horizon = params.issue_date.add_years(HORIZON_YEARS)?;

        // Anchor the final coupon inside the redemption month; if the
        // clamp pushed it past redemption, back up one full period
        let mut last = clamp_to_month(redemption.year(), redemption.month(), params.payment_day)?;
        if last > redemption {
            last = step_clamped(last, -months, params.payment_day)?;
        }

        // The walk may start past the horizon when redemption does;
        // those dates are skipped so no coupon lands after issue + 10y
        let mut all = Vec::new();
        let mut date = last;
        let mut steps = 0u32;
        while date >= params.issue_date && steps < MAX_STEPS {
            if date <= horizon {
                all.push(date);
            }
            date = step_clamped(date, -months, params.payment_day)?;
            steps += 1;
        }

        all.sort_unstable();
        all.dedup();

        let dates: Vec<Date> = all.iter().copied().filter(|d| params.accrues(*d)).collect();
        if !dates.is_empty() {
            return Ok(Self { dates });
        }
        if all.is_empty() {
            return Ok(Self { dates: Vec::new() });
        }

        log::debug!(
            "accrual filter kept no coupons (purchase {}); falling back to nearest date",
            params.purchase_date
        );

        // Prefer the earliest coupon strictly after the purchase date
        if let Some(next) = all.iter().copied().find(|d| *d > params.purchase_date) {
            return Ok(Self { dates: vec![next] });
        }

        // Otherwise the coupon closest to the purchase date; the first
        // in ascending order wins ties
        let mut best = all[0];
        let mut best_distance = (best - params.purchase_date).abs();
        for candidate in all.iter().skip(1) {
            let distance = (*candidate - params.purchase_date).abs();
            if distance < best_distance {
                best = *candidate;
                best_distance = distance;
            }
        }

        Ok(Self { dates: vec![best] })
    }
}
