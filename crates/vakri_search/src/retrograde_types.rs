//! Types for retrogradation search and aggregation.

use vakri_core::{Body, EphemerisSnapshot};

use crate::secant::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_DAYS};

/// Which day-boundary speed transition a scan looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Longitude speed positive at day start, negative at day end: the
    /// body stations retrograde during the day.
    Retrograde,
    /// Longitude speed negative at day start, positive at day end: the
    /// body resumes direct motion during the day.
    Direct,
}

/// One continuous retrograde arc, bounded by its two zero-speed crossings.
///
/// `start_jd_ut < end_jd_ut` always holds; the speed signal flips from
/// positive to negative at the start boundary and back at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeArc {
    /// Which body.
    pub body: Body,
    /// Station-retrograde time as Julian Day (UT).
    pub start_jd_ut: f64,
    /// Station-direct time as Julian Day (UT).
    pub end_jd_ut: f64,
    /// Oracle state at the start boundary.
    pub start_state: EphemerisSnapshot,
    /// Oracle state at the end boundary.
    pub end_state: EphemerisSnapshot,
    /// Whether both boundary refinements met tolerance.
    pub converged: bool,
}

/// Configuration for retrogradation searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeConfig {
    /// Coarse speed-scan step size in days (default 1.0; the shortest
    /// retrograde arcs last about three weeks, so daily sampling cannot
    /// skip one).
    pub step_size_days: f64,
    /// Secant convergence tolerance in days (default 1e-6).
    pub tolerance_days: f64,
    /// Secant iteration budget (default 100).
    pub max_iterations: u32,
    /// Speed-scan range cap in days (default 800, covering every body's
    /// synodic period).
    pub max_scan_days: f64,
}

impl Default for RetrogradeConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_scan_days: 800.0,
        }
    }
}

impl RetrogradeConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err("tolerance_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days <= 0.0 {
            return Err("max_scan_days must be positive");
        }
        Ok(())
    }
}
