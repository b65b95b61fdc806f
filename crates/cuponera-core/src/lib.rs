//! # Cuponera Core
//!
//! Core types and day count conventions for the Cuponera schedule and
//! yield analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Cuponera:
//!
//! - **Types**: Domain-specific types like `Date`, `Periodicity`,
//!   `PaymentDay`, `CashFlow`
//! - **Day Count Conventions**: Accrual fraction calculations under the
//!   market conventions the calculator supports
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Pure Computation**: No I/O, no shared state; every operation is a
//!   deterministic function of its inputs
//! - **Explicit Over Implicit**: Invalid input is a typed error, not a
//!   silent default; legacy-style defaults live in opt-in wrappers
//!
//! ## Example
//!
//! ```rust
//! use cuponera_core::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = Date::from_ymd(2024, 2, 15).unwrap();
//!
//! let yf = DayCountConvention::Thirty360US.fraction_of_year(start, end);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::manual_range_contains)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CuponeraError, CuponeraResult};
    pub use crate::types::{CashFlow, Date, PaymentDay, Periodicity};
}

// Re-export commonly used types at crate root
pub use error::{CuponeraError, CuponeraResult};
pub use types::{CashFlow, Date, PaymentDay, Periodicity};
