//! Scalar signal functions the root finders operate on.
//!
//! Both are pure functions of `(oracle, body, time)` with no hidden state,
//! exactly one oracle query per call. Oracle domain errors propagate
//! unchanged; nothing here attempts numeric recovery.

use vakri_core::{Body, Ephemeris, angular_difference};

use crate::error::SearchError;

/// Signed minimal angular distance of `body`'s longitude to a target
/// longitude, in degrees, normalized to (-180, +180].
///
/// Changes sign exactly when the body's longitude crosses the target along
/// the shorter arc.
pub fn longitude_distance(
    oracle: &dyn Ephemeris,
    body: Body,
    target_longitude_deg: f64,
    jd_ut: f64,
) -> Result<f64, SearchError> {
    let state = oracle.calc(body, jd_ut)?;
    Ok(angular_difference(state.longitude_deg, target_longitude_deg))
}

/// Instantaneous longitude speed of `body` in degrees per day.
///
/// Positive = prograde, negative = retrograde.
pub fn longitude_speed(oracle: &dyn Ephemeris, body: Body, jd_ut: f64) -> Result<f64, SearchError> {
    let state = oracle.calc(body, jd_ut)?;
    Ok(state.longitude_speed)
}
