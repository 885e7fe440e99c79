//! Shared coarse-scan helper for the crossing and retrogradation engines.

use crate::error::SearchError;

/// A bracketed sign flip: the two consecutive scan samples straddling a
/// zero crossing, in scan order (`t_prev` was sampled first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SignFlip {
    pub t_prev: f64,
    pub t_curr: f64,
}

/// Step from `start_jd` by `step_days` (signed; negative scans backward)
/// until `accept(f_prev, f_curr)` fires, and return that sample pair.
///
/// The scan gives up after covering `max_scan_days` of travel and returns
/// `None`: no crossing found within the step budget.
pub(crate) fn scan_for_sign_flip<F, A>(
    start_jd: f64,
    step_days: f64,
    max_scan_days: f64,
    accept: A,
    mut f: F,
) -> Result<Option<SignFlip>, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
    A: Fn(f64, f64) -> bool,
{
    let max_steps = (max_scan_days / step_days.abs()).ceil() as usize;

    let mut t_prev = start_jd;
    let mut f_prev = f(t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev + step_days;
        let f_curr = f(t_curr)?;

        if accept(f_prev, f_curr) {
            return Ok(Some(SignFlip { t_prev, t_curr }));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}
