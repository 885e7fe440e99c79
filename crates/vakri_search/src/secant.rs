//! Generic secant-method root finder.
//!
//! One solver, many signals: the crossing and retrogradation engines both
//! refine their coarse brackets through this function, passing the signal
//! as a closure.
//!
//! The contract is deliberately best-effort: the solver always returns its
//! last estimate, even when the iteration budget runs out before the
//! tolerance is met. Callers that bracket a single well-behaved crossing
//! (the scanners guarantee this) converge in a handful of iterations; the
//! [`RootResult::converged`] tag is there for callers that want to check.

use crate::error::SearchError;

/// Default convergence tolerance on the bracket width, in days.
pub const DEFAULT_TOLERANCE_DAYS: f64 = 1e-6;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Outcome of a secant refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Last computed estimate of the zero-crossing time.
    pub jd_ut: f64,
    /// Iterations actually performed.
    pub iterations: u32,
    /// Whether the bracket width fell below tolerance (or an exact zero
    /// was hit) before the iteration budget ran out.
    pub converged: bool,
}

/// Refine a zero crossing of `f` starting from the bracket `(a, b)`.
///
/// `a` is the older scan sample, `b` the sample that completed the bracket;
/// the first secant update is seeded from `b`. The pair is used as given,
/// without reordering, so backward scans pass a descending bracket.
pub fn secant<F>(
    a: f64,
    b: f64,
    tolerance_days: f64,
    max_iterations: u32,
    mut f: F,
) -> Result<RootResult, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    let mut a = a;
    let mut b = b;
    let mut f_a = f(a)?;
    let mut f_b = f(b)?;

    let mut c = a;
    let mut iterations = 0u32;
    let mut exact = false;

    while (b - a).abs() >= tolerance_days && iterations < max_iterations {
        let denom = f_b - f_a;
        if denom == 0.0 {
            return Err(SearchError::DegenerateBracket { jd_a: a, jd_b: b });
        }
        c = b - f_b * (b - a) / denom;
        let f_c = f(c)?;
        iterations += 1;

        if f_c == 0.0 {
            exact = true;
            break;
        }
        a = b;
        f_a = f_b;
        b = c;
        f_b = f_c;
    }

    Ok(RootResult {
        jd_ut: c,
        iterations,
        converged: exact || (b - a).abs() < tolerance_days,
    })
}
