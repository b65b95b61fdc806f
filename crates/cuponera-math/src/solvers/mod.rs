//! Root-finding algorithms.
//!
//! This module provides the numerical solvers the yield engine uses:
//!
//! - [`directional_search`]: derivative-free adaptive walk with
//!   bisection refinement, robust for NPV-style objectives
//! - [`bisection`]: simple and reliable bracketing method
//!
//! # Choosing a Solver
//!
//! Cash-flow sign patterns in this domain are simple (one outflow
//! followed by positive inflows), so a directional walk that brackets
//! the root and then bisects converges reliably without derivative-based
//! methods that can diverge near a flat objective.
//!
//! # Example
//!
//! ```rust
//! use cuponera_math::solvers::{directional_search, SolverConfig};
//!
//! // Two-flow NPV: -100 now, 110 in one year
//! let npv = |r: f64| -100.0 + 110.0 / (1.0 + r);
//!
//! let result = directional_search(npv, (-0.99, 10.0), &SolverConfig::default());
//! assert!(result.is_converged());
//! assert!((result.root - 0.10).abs() < 1e-6);
//! ```

mod bisection;
mod directional;

pub use bisection::bisection;
pub use directional::directional_search;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for the directional search.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Maximum iterations for the bisection refinement stage.
pub const BISECTION_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Whether a solver run actually reached its tolerance.
///
/// Exhausting the iteration budget still yields a numeric root, so
/// callers need this status to tell a converged root from a best-effort
/// approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The residual fell below the configured tolerance.
    Converged,
    /// The iteration budget ran out; the root is the last value computed.
    IterationLimit,
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found (best-effort when not converged).
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
    /// Whether the run converged or exhausted its budget.
    pub status: Convergence,
}

impl SolverResult {
    /// Returns true if the run reached its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Convergence::Converged
    }
}
