//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{Convergence, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A bracketing method that repeatedly halves the interval and keeps the
/// subinterval containing the root.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at endpoints).
///
/// Exhausting the iteration budget is a soft failure: the final midpoint
/// is returned with [`Convergence::IterationLimit`] rather than an
/// error, since a narrowed bracket is still a usable approximation.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns `MathError::InvalidBracket` when the endpoints have the same
/// sign.
///
/// # Example
///
/// ```rust
/// use cuponera_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Check that a root is bracketed
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Handle case where an endpoint is already the root
    if f_lo.abs() < config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
            status: Convergence::Converged,
        });
    }
    if f_hi.abs() < config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
            status: Convergence::Converged,
        });
    }

    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f(mid);

    for iteration in 0..config.max_iterations {
        if f_mid.abs() < config.tolerance || (hi - lo) / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
                status: Convergence::Converged,
            });
        }

        // Keep the half that still brackets the root
        if f_mid * f_lo < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        mid = (lo + hi) / 2.0;
        f_mid = f(mid);
    }

    // Budget exhausted: the final midpoint is the best-effort root
    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual: f_mid,
        status: Convergence::IterationLimit,
    })
}
