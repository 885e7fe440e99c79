//! Error types for the search engines.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vakri_core::EphemerisError;

/// Errors from crossing, retrogradation, or aggregation searches.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Caller-supplied configuration or arguments are unusable.
    InvalidConfig(&'static str),
    /// Secant bracket with equal function values at both ends; the
    /// update would divide by zero. Happens on flat or aliased signals.
    DegenerateBracket { jd_a: f64, jd_b: f64 },
    /// The oracle reported a failure; fatal to the current search.
    Ephemeris(EphemerisError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DegenerateBracket { jd_a, jd_b } => {
                write!(f, "degenerate bracket [JD {jd_a}, JD {jd_b}]: equal signal values")
            }
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
