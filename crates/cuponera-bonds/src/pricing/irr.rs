//! Internal rate of return over dated cash flows.

use rust_decimal::prelude::ToPrimitive;

use cuponera_core::daycounts::DayCountConvention;
use cuponera_core::types::{CashFlow, Date};
use cuponera_math::prelude::{directional_search, Convergence, SolverConfig};

use crate::error::{BondError, BondResult};

/// Lower bound of the rate search domain, just above total loss.
pub const RATE_FLOOR: f64 = -0.99;

/// Upper bound of the rate search domain, 1000% annually.
pub const RATE_CAP: f64 = 10.0;

/// Discounts `flows` to `valuation_date` at the annual `rate`.
///
/// Time is measured with `convention`; flows on or before the valuation
/// date are taken at face value. The discount factor is
/// `(1 + rate)^-t` with `t` in years.
#[must_use]
pub fn present_value(
    flows: &[CashFlow],
    valuation_date: Date,
    rate: f64,
    convention: DayCountConvention,
) -> f64 {
    flows
        .iter()
        .map(|flow| {
            let t = convention
                .fraction_of_year(valuation_date, flow.date)
                .to_f64()
                .unwrap_or(0.0);
            flow.amount / (1.0 + rate).powf(t)
        })
        .sum()
}

/// Outcome of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// Annual rate at which the flows price to zero.
    pub rate: f64,
    /// Solver iterations spent.
    pub iterations: u32,
    /// Net present value at `rate`.
    pub residual: f64,
    /// Whether the solver met its tolerance or ran out of budget.
    pub status: Convergence,
}

impl YieldResult {
    /// True if the residual met the solver tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Convergence::Converged
    }
}

/// Finds the annual rate at which a cash flow sequence has zero net
/// present value.
///
/// The search is bounded to `[RATE_FLOOR, RATE_CAP]` and never fails on
/// a hard-to-solve objective; exhaustion of the iteration budget is
/// reported through [`YieldResult::status`]. Only structurally invalid
/// inputs produce errors.
///
/// # Example
///
/// ```rust
/// use cuponera_bonds::pricing::YieldSolver;
/// use cuponera_core::daycounts::DayCountConvention;
/// use cuponera_core::types::{CashFlow, Date};
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let flows = vec![
///     CashFlow::new(valuation, -1000.0),
///     CashFlow::new(Date::from_ymd(2024, 1, 1).unwrap(), 1100.0),
/// ];
///
/// let solver = YieldSolver::new(DayCountConvention::Act365);
/// let result = solver.solve(&flows, valuation).unwrap();
/// assert!((result.rate - 0.10).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YieldSolver {
    convention: DayCountConvention,
    config: SolverConfig,
}

impl YieldSolver {
    /// Creates a solver with the default tolerance and iteration budget.
    #[must_use]
    pub fn new(convention: DayCountConvention) -> Self {
        Self {
            convention,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Solves for the yield of `flows` as of `valuation_date`.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::DegenerateCashFlows`] when fewer than two
    /// flows are given or when every flow has the same sign, in which
    /// case no discount rate can price the sequence to zero.
    pub fn solve(&self, flows: &[CashFlow], valuation_date: Date) -> BondResult<YieldResult> {
        if flows.len() < 2 {
            return Err(BondError::degenerate_cash_flows(
                "at least two cash flows are required",
            ));
        }
        let has_outflow = flows.iter().any(|f| f.amount < 0.0);
        let has_inflow = flows.iter().any(|f| f.amount > 0.0);
        if !has_outflow || !has_inflow {
            return Err(BondError::degenerate_cash_flows(
                "cash flows must include both an outflow and an inflow",
            ));
        }

        let convention = self.convention;
        let objective = |rate: f64| present_value(flows, valuation_date, rate, convention);

        let solved = directional_search(objective, (RATE_FLOOR, RATE_CAP), &self.config);

        if solved.status == Convergence::IterationLimit {
            log::debug!(
                "yield search exhausted its budget at rate {} (residual {})",
                solved.root,
                solved.residual
            );
        }

        Ok(YieldResult {
            rate: solved.root,
            iterations: solved.iterations,
            residual: solved.residual,
            status: solved.status,
        })
    }
}
