//! Retrogradation locator: bounds of a single retrograde arc.
//!
//! A retrograde arc is a maximal interval of negative longitude speed. Its
//! boundaries are zero crossings of the speed signal: station retrograde
//! (positive to negative) at the start, station direct (negative to
//! positive) at the end. From an anchor time inside the arc the two
//! boundaries are searched fully independently: a backward scan for the
//! start and a forward scan for the end, each bracketed in coarse steps
//! and refined by the secant solver.

use vakri_core::{Body, Ephemeris};

use crate::crossing_types::SearchDirection;
use crate::error::SearchError;
use crate::retrograde_types::{RetrogradeArc, RetrogradeConfig};
use crate::secant::{RootResult, secant};
use crate::search_util::scan_for_sign_flip;
use crate::signal::longitude_speed;

/// Bodies that never go retrograde geocentrically.
/// Sun and Moon both move strictly eastward along the ecliptic.
fn validate_retrograde_body(body: Body) -> Result<(), SearchError> {
    match body {
        Body::Sun | Body::Moon => Err(SearchError::InvalidConfig(
            "Sun and Moon do not go retrograde",
        )),
        _ => Ok(()),
    }
}

/// Find and refine the nearest speed zero crossing in the given direction.
fn speed_zero_crossing(
    oracle: &dyn Ephemeris,
    body: Body,
    anchor_jd: f64,
    direction: SearchDirection,
    config: &RetrogradeConfig,
) -> Result<Option<RootResult>, SearchError> {
    let step = match direction {
        SearchDirection::Forward => config.step_size_days,
        SearchDirection::Backward => -config.step_size_days,
    };

    let speed_at = |t: f64| longitude_speed(oracle, body, t);

    let Some(flip) = scan_for_sign_flip(
        anchor_jd,
        step,
        config.max_scan_days,
        |a, b| a * b < 0.0,
        speed_at,
    )?
    else {
        return Ok(None);
    };

    let root = secant(
        flip.t_prev,
        flip.t_curr,
        config.tolerance_days,
        config.max_iterations,
        speed_at,
    )?;
    Ok(Some(root))
}

/// Locate the full arc around `anchor_jd`, which must have negative speed.
///
/// Returns `None` if either boundary scan exhausts its budget, or if the
/// refined boundaries come back inverted (a pathological signal).
pub(crate) fn locate_arc(
    oracle: &dyn Ephemeris,
    body: Body,
    anchor_jd: f64,
    config: &RetrogradeConfig,
) -> Result<Option<RetrogradeArc>, SearchError> {
    let start = speed_zero_crossing(oracle, body, anchor_jd, SearchDirection::Backward, config)?;
    let end = speed_zero_crossing(oracle, body, anchor_jd, SearchDirection::Forward, config)?;

    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };
    if start.jd_ut >= end.jd_ut {
        return Ok(None);
    }

    let start_state = oracle.calc(body, start.jd_ut)?;
    let end_state = oracle.calc(body, end.jd_ut)?;

    Ok(Some(RetrogradeArc {
        body,
        start_jd_ut: start.jd_ut,
        end_jd_ut: end.jd_ut,
        start_state,
        end_state,
        converged: start.converged && end.converged,
    }))
}

/// Bounds of the retrograde arc containing `jd_ut`.
///
/// Returns `Ok(None)` when the body's longitude speed at `jd_ut` is not
/// negative, i.e. the time does not lie inside a retrograde arc.
pub fn retrograde_bounds(
    oracle: &dyn Ephemeris,
    body: Body,
    jd_ut: f64,
    config: &RetrogradeConfig,
) -> Result<Option<RetrogradeArc>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_retrograde_body(body)?;
    if !jd_ut.is_finite() {
        return Err(SearchError::InvalidConfig("jd_ut must be finite"));
    }

    if longitude_speed(oracle, body, jd_ut)? >= 0.0 {
        return Ok(None);
    }
    locate_arc(oracle, body, jd_ut, config)
}

/// The next retrograde arc entered strictly after `since_jd`.
///
/// Scans forward for the next positive-to-negative speed crossing (an arc
/// already in progress at `since_jd` is skipped), then locates the full
/// arc around it.
pub fn next_retrograde(
    oracle: &dyn Ephemeris,
    body: Body,
    since_jd: f64,
    config: &RetrogradeConfig,
) -> Result<Option<RetrogradeArc>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_retrograde_body(body)?;
    if !since_jd.is_finite() {
        return Err(SearchError::InvalidConfig("since_jd must be finite"));
    }

    let speed_at = |t: f64| longitude_speed(oracle, body, t);

    let Some(flip) = scan_for_sign_flip(
        since_jd,
        config.step_size_days,
        config.max_scan_days,
        |a, b| a > 0.0 && b < 0.0,
        speed_at,
    )?
    else {
        return Ok(None);
    };

    // The sample that completed the bracket is inside the new arc; anchor
    // the boundary searches there.
    locate_arc(oracle, body, flip.t_curr, config)
}
