//! Directional adaptive search with bisection refinement.

use crate::solvers::{
    bisection, Convergence, SolverConfig, SolverResult, BISECTION_MAX_ITERATIONS,
};

/// Initial step size: one percentage point.
const INITIAL_STEP: f64 = 0.01;

/// Step size below which the search hands off to bisection.
const BISECTION_SWITCH: f64 = 1e-4;

/// Derivative-free directional search over a bounded domain.
///
/// Starts at zero and walks in the direction that should reduce the
/// objective (positive `f(0)` means larger arguments are tried first,
/// matching NPV-style functions that decrease in the rate). Each sign
/// flip halves the step and reverses direction; once the step is small
/// enough the last two rates bracket the root and the search hands off
/// to [`bisection`] for refinement. After a bracket has been seen once,
/// steps that fail to re-cross the root also shrink, which damps
/// oscillation around it.
///
/// Every evaluation stays inside `domain`. The search never fails hard:
/// exhausting the budget returns the last rate with
/// [`Convergence::IterationLimit`].
///
/// # Arguments
///
/// * `f` - The objective function
/// * `domain` - Inclusive bounds the argument is clamped into
/// * `config` - Tolerance and directional iteration budget
pub fn directional_search<F>(f: F, domain: (f64, f64), config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
{
    let (lo, hi) = (domain.0.min(domain.1), domain.0.max(domain.1));

    let mut r = 0.0_f64.clamp(lo, hi);
    let mut f_prev = f(r);
    if f_prev.abs() < config.tolerance {
        return SolverResult {
            root: r,
            iterations: 0,
            residual: f_prev,
            status: Convergence::Converged,
        };
    }

    let mut direction = if f_prev > 0.0 { 1.0 } else { -1.0 };
    let mut step = INITIAL_STEP;
    let mut bracketed = false;

    for iteration in 0..config.max_iterations {
        let next = (r + direction * step).clamp(lo, hi);
        let f_next = f(next);

        if f_next.abs() < config.tolerance {
            return SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f_next,
                status: Convergence::Converged,
            };
        }

        if f_next * f_prev < 0.0 {
            // The root lies between r and next
            bracketed = true;
            step /= 2.0;
            direction = -direction;

            if step < BISECTION_SWITCH {
                let refine = SolverConfig::new(config.tolerance, BISECTION_MAX_ITERATIONS);
                if let Ok(result) = bisection(&f, r, next, &refine) {
                    return SolverResult {
                        iterations: iteration + 1 + result.iterations,
                        ..result
                    };
                }
            }
        } else if bracketed {
            // Bracket found earlier but lost this step: shrink so the
            // walk cannot keep overshooting the root
            step /= 2.0;
        }

        r = next;
        f_prev = f_next;
    }

    log::debug!(
        "directional search exhausted {} iterations at r={r} (residual {f_prev:.3e})",
        config.max_iterations
    );

    SolverResult {
        root: r,
        iterations: config.max_iterations,
        residual: f_prev,
        status: Convergence::IterationLimit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RATE_DOMAIN: (f64, f64) = (-0.99, 10.0);

    #[test]
    fn test_two_flow_npv() {
        // -100 now, 110 in one year: r = 10%
        let npv = |r: f64| -100.0 + 110.0 / (1.0 + r);

        let result = directional_search(npv, RATE_DOMAIN, &SolverConfig::default());

        assert!(result.is_converged());
        assert_relative_eq!(result.root, 0.10, epsilon = 1e-8);
    }

    #[test]
    fn test_semiannual_bond_npv() {
        // -1000 at t=0, 50 at t=0.5, 1050 at t=1.0
        // Analytic root: (1+r)^0.5 = 1.05, so r = 0.1025
        let npv = |r: f64| -1000.0 + 50.0 / (1.0 + r).powf(0.5) + 1050.0 / (1.0 + r);

        let result = directional_search(npv, RATE_DOMAIN, &SolverConfig::default());

        assert!(result.is_converged());
        assert_relative_eq!(result.root, 0.1025, epsilon = 1e-8);
        assert!(npv(result.root).abs() < 1e-8);
    }

    #[test]
    fn test_negative_rate() {
        // -1000 now, 950 in one year: r = -5%
        let npv = |r: f64| -1000.0 + 950.0 / (1.0 + r);

        let result = directional_search(npv, RATE_DOMAIN, &SolverConfig::default());

        assert!(result.is_converged());
        assert_relative_eq!(result.root, -0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_is_immediate_root() {
        let npv = |r: f64| -100.0 + 100.0 / (1.0 + r);

        let result = directional_search(npv, RATE_DOMAIN, &SolverConfig::default());

        assert!(result.is_converged());
        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rootless_objective_hits_boundary() {
        // Always positive: the walk runs up against the domain cap
        let f = |r: f64| 100.0 + r.abs();

        let result = directional_search(f, RATE_DOMAIN, &SolverConfig::default());

        assert!(!result.is_converged());
        assert_relative_eq!(result.root, RATE_DOMAIN.1, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_clamp_lower() {
        // Always negative: the walk runs down against the floor
        let f = |r: f64| -100.0 - r.abs();

        let result = directional_search(f, RATE_DOMAIN, &SolverConfig::default());

        assert!(!result.is_converged());
        assert_relative_eq!(result.root, RATE_DOMAIN.0, epsilon = 1e-12);
    }

    #[test]
    fn test_high_yield_deep_discount() {
        // Deep discount flows produce a large rate far from the start
        let npv = |r: f64| -500.0 + 1050.0 / (1.0 + r);

        let result = directional_search(npv, RATE_DOMAIN, &SolverConfig::default());

        assert!(result.is_converged());
        assert_relative_eq!(result.root, 1.1, epsilon = 1e-7);
    }
}
