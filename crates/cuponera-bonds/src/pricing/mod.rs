//! Bond pricing and yield calculation.
//!
//! [`present_value`] discounts a dated cash flow sequence at an annual
//! rate, using a day count convention to measure time; [`YieldSolver`]
//! inverts it, finding the rate at which the flows price to zero.

mod irr;

pub use irr::{present_value, YieldResult, YieldSolver, RATE_CAP, RATE_FLOOR};
