//! Types for the longitude-crossing engine.

use vakri_core::Body;

use crate::secant::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_DAYS};

/// Scan direction relative to the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// A refined longitude crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingEvent {
    /// Crossing time as Julian Day (UT).
    pub jd_ut: f64,
    /// Which body.
    pub body: Body,
    /// The target longitude searched for, in degrees.
    pub target_longitude_deg: f64,
    /// Body longitude at the refined time, in degrees [0, 360).
    pub longitude_deg: f64,
    /// Body latitude at the refined time, in degrees.
    pub latitude_deg: f64,
    /// Whether the refinement met tolerance within its iteration budget.
    pub converged: bool,
}

/// Configuration for crossing searches.
///
/// The coarse step size is not configurable; it comes from the per-body
/// interval table, which encodes the no-skipped-crossing guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Secant convergence tolerance in days (default 1e-6, ~0.09 s).
    pub tolerance_days: f64,
    /// Secant iteration budget (default 100).
    pub max_iterations: u32,
    /// Coarse-scan range cap in days (default 100 000, ~274 years,
    /// enough for the slowest geocentric sweep, Pluto's).
    pub max_scan_days: f64,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_scan_days: 100_000.0,
        }
    }
}

impl CrossingConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = CrossingConfig::default();
        assert!((c.tolerance_days - 1e-6).abs() < 1e-18);
        assert_eq!(c.max_iterations, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_tolerance() {
        let mut c = CrossingConfig::default();
        c.tolerance_days = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut c = CrossingConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_scan_range() {
        let mut c = CrossingConfig::default();
        c.max_scan_days = -1.0;
        assert!(c.validate().is_err());
    }
}
