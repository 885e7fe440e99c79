//! Longitude-crossing search engine.
//!
//! Finds when a body's ecliptic longitude crosses a target value. Uses a
//! coarse scan in per-body steps to bracket a sign change of the signed
//! angular distance, then secant refinement on the bracket.

use vakri_core::{Body, Ephemeris};

use crate::crossing_types::{CrossingConfig, CrossingEvent, SearchDirection};
use crate::error::SearchError;
use crate::secant::secant;
use crate::search_util::scan_for_sign_flip;
use crate::signal::longitude_distance;

/// Coarse-scan step size in days for each body.
///
/// Sized to each body's apparent motion so a scan step cannot jump over a
/// crossing: fast movers get sub-day or single-day steps, slow outer
/// planets can afford weeks. Validated against real synodic behavior;
/// treat as data, not something to derive.
pub const fn search_interval_days(body: Body) -> f64 {
    match body {
        Body::Sun => 1.0,
        Body::Moon => 0.5,
        Body::Mercury => 1.0,
        Body::Venus => 1.0,
        Body::Mars => 1.0,
        Body::Jupiter => 3.0,
        Body::Saturn => 4.0,
        Body::Uranus => 10.0,
        Body::Neptune => 15.0,
        Body::Pluto => 30.0,
    }
}

/// Check if a sign change is a genuine zero crossing vs a wrap-around
/// discontinuity.
///
/// The distance signal jumps from ~+180 to ~-180 when the body passes the
/// target's antipode; the product goes negative but there is no crossing.
/// A genuine crossing keeps both samples small in magnitude.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the nearest crossing in the given direction.
fn find_crossing(
    oracle: &dyn Ephemeris,
    body: Body,
    target_longitude_deg: f64,
    start_jd: f64,
    direction: SearchDirection,
    config: &CrossingConfig,
) -> Result<Option<CrossingEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !start_jd.is_finite() {
        return Err(SearchError::InvalidConfig("start_jd must be finite"));
    }
    if !target_longitude_deg.is_finite() {
        return Err(SearchError::InvalidConfig("target_longitude_deg must be finite"));
    }

    let interval = search_interval_days(body);
    let step = match direction {
        SearchDirection::Forward => interval,
        SearchDirection::Backward => -interval,
    };

    let distance_at =
        |t: f64| longitude_distance(oracle, body, target_longitude_deg, t);

    let Some(flip) = scan_for_sign_flip(
        start_jd,
        step,
        config.max_scan_days,
        is_genuine_crossing,
        distance_at,
    )?
    else {
        return Ok(None);
    };

    // Refinement bracket in scan order: the older sample first, then the
    // sample that completed the bracket. Backward scans hand the solver a
    // descending pair on purpose.
    let root = secant(
        flip.t_prev,
        flip.t_curr,
        config.tolerance_days,
        config.max_iterations,
        distance_at,
    )?;

    let state = oracle.calc(body, root.jd_ut)?;

    Ok(Some(CrossingEvent {
        jd_ut: root.jd_ut,
        body,
        target_longitude_deg,
        longitude_deg: state.longitude_deg,
        latitude_deg: state.latitude_deg,
        converged: root.converged,
    }))
}

/// Find the next crossing of `target_longitude_deg` after `start_jd`.
pub fn next_crossing(
    oracle: &dyn Ephemeris,
    body: Body,
    target_longitude_deg: f64,
    start_jd: f64,
    config: &CrossingConfig,
) -> Result<Option<CrossingEvent>, SearchError> {
    find_crossing(
        oracle,
        body,
        target_longitude_deg,
        start_jd,
        SearchDirection::Forward,
        config,
    )
}

/// Find the previous crossing of `target_longitude_deg` before `start_jd`.
pub fn prev_crossing(
    oracle: &dyn Ephemeris,
    body: Body,
    target_longitude_deg: f64,
    start_jd: f64,
    config: &CrossingConfig,
) -> Result<Option<CrossingEvent>, SearchError> {
    find_crossing(
        oracle,
        body,
        target_longitude_deg,
        start_jd,
        SearchDirection::Backward,
        config,
    )
}
