//! Day-by-day aggregation of retrograde and direct transitions.
//!
//! The scan works at calendar-day granularity: each body's longitude speed
//! is sampled at a day's exact UT boundaries, and a sign difference between
//! the two samples marks the day as containing a transition. An arc whose
//! speed sign is the same at both boundary samples (for instance one
//! entirely contained within a single day) is invisible to the day scan.
//! Callers needing arcs regardless of day alignment use
//! [`next_retrograde`](crate::retrograde::next_retrograde).
//!
//! One failing body never aborts a day, and one failing day never aborts a
//! range: failed computations simply leave no entry.

use vakri_core::{Body, Ephemeris};
use vakri_time::day_bounds;

use crate::error::SearchError;
use crate::retrograde::locate_arc;
use crate::retrograde_types::{RetrogradeArc, RetrogradeConfig, TransitionKind};
use crate::signal::longitude_speed;

/// Bodies tracked for retrogradation, in scan order.
pub const RETROGRADE_ROSTER: [Body; 8] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// All transitions of `kind` within the UT calendar day containing `jd_ut`.
///
/// Samples every roster body at the day's boundaries; each body whose
/// speed sign matches the requested pattern gets its full arc located and
/// appended, in roster order.
pub fn transitions_in_day(
    oracle: &dyn Ephemeris,
    jd_ut: f64,
    kind: TransitionKind,
    config: &RetrogradeConfig,
) -> Result<Vec<RetrogradeArc>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_ut.is_finite() {
        return Err(SearchError::InvalidConfig("jd_ut must be finite"));
    }

    let (day_start, day_end) = day_bounds(jd_ut);
    let mut events = Vec::new();

    for body in RETROGRADE_ROSTER {
        let Ok(v_start) = longitude_speed(oracle, body, day_start) else {
            continue;
        };
        let Ok(v_end) = longitude_speed(oracle, body, day_end) else {
            continue;
        };

        // Anchor the arc search at whichever boundary sits inside the arc.
        let anchor = match kind {
            TransitionKind::Retrograde if v_start > 0.0 && v_end < 0.0 => day_end,
            TransitionKind::Direct if v_start < 0.0 && v_end > 0.0 => day_start,
            _ => continue,
        };

        if let Ok(Some(arc)) = locate_arc(oracle, body, anchor, config) {
            events.push(arc);
        }
    }

    Ok(events)
}

/// All transitions of `kind` in whole-day steps over `[jd_start, jd_end)`.
///
/// Events are concatenated in day order; a zero-width range yields an
/// empty list.
pub fn search_transitions(
    oracle: &dyn Ephemeris,
    jd_start: f64,
    jd_end: f64,
    kind: TransitionKind,
    config: &RetrogradeConfig,
) -> Result<Vec<RetrogradeArc>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_start.is_finite() || !jd_end.is_finite() {
        return Err(SearchError::InvalidConfig("scan range must be finite"));
    }
    if jd_end < jd_start {
        return Err(SearchError::InvalidConfig("jd_end must not be before jd_start"));
    }

    let mut events = Vec::new();
    let mut t = jd_start;
    while t < jd_end {
        events.extend(transitions_in_day(oracle, t, kind, config)?);
        t += 1.0;
    }

    Ok(events)
}

/// All bodies entering retrogradation in `[jd_start, jd_end)`.
pub fn search_new_retrogrades(
    oracle: &dyn Ephemeris,
    jd_start: f64,
    jd_end: f64,
    config: &RetrogradeConfig,
) -> Result<Vec<RetrogradeArc>, SearchError> {
    search_transitions(oracle, jd_start, jd_end, TransitionKind::Retrograde, config)
}

/// All bodies resuming direct motion in `[jd_start, jd_end)`.
pub fn search_new_directs(
    oracle: &dyn Ephemeris,
    jd_start: f64,
    jd_end: f64,
    config: &RetrogradeConfig,
) -> Result<Vec<RetrogradeArc>, SearchError> {
    search_transitions(oracle, jd_start, jd_end, TransitionKind::Direct, config)
}
