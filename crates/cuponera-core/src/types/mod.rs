//! Core domain types.

mod cashflow;
mod date;
mod payment_day;
mod periodicity;

pub use cashflow::CashFlow;
pub use date::Date;
pub use payment_day::PaymentDay;
pub use periodicity::Periodicity;
