//! # Cuponera Bonds
//!
//! Coupon schedule generation and yield solving for the Cuponera
//! schedule and yield analytics library.
//!
//! This crate provides:
//!
//! - **Schedules**: coupon payment-date sequences from issue date,
//!   payment day, periodicity, purchase date, and optional redemption
//! - **Yield**: the internal rate of return implied by a purchase price
//!   and subsequent cash flows
//!
//! ## Example
//!
//! ```rust
//! use cuponera_bonds::prelude::*;
//! use cuponera_core::prelude::*;
//!
//! let params = ScheduleParams::new(
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     PaymentDay::new(15).unwrap(),
//!     Periodicity::Quarterly,
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//! )
//! .with_redemption(Date::from_ymd(2024, 1, 15).unwrap());
//!
//! let schedule = CouponSchedule::generate(&params).unwrap();
//! assert_eq!(schedule.dates().len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod pricing;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{YieldResult, YieldSolver};
    pub use crate::schedule::{
        current_coupon_number, current_coupon_number_or_default, first_payment_date,
        generate_or_empty, CouponSchedule, ScheduleParams,
    };
}

pub use error::{BondError, BondResult};
