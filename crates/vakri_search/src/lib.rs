//! Planetary event search engine: longitude crossings and retrograde arcs.
//!
//! This crate provides:
//! - Next/previous crossing of a target ecliptic longitude for any body
//! - Retrograde arc location (station retrograde / station direct bounds)
//! - Day-by-day and range aggregation of retrograde/direct transitions
//! - The generic secant refiner the engines share
//!
//! All searches follow the same coarse-scan + secant-refinement pattern:
//! step a scalar signal of time until its sign flips, then hand the
//! bracketing sample pair to the solver. The ephemeris itself is a
//! black box behind the [`vakri_core::Ephemeris`] trait.

pub mod aggregate;
pub mod crossing;
pub mod crossing_types;
pub mod error;
pub mod retrograde;
pub mod retrograde_types;
pub mod secant;
pub(crate) mod search_util;
pub mod signal;

pub use aggregate::{
    RETROGRADE_ROSTER, search_new_directs, search_new_retrogrades, search_transitions,
    transitions_in_day,
};
pub use crossing::{next_crossing, prev_crossing, search_interval_days};
pub use crossing_types::{CrossingConfig, CrossingEvent, SearchDirection};
pub use error::SearchError;
pub use retrograde::{next_retrograde, retrograde_bounds};
pub use retrograde_types::{RetrogradeArc, RetrogradeConfig, TransitionKind};
pub use secant::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_DAYS, RootResult, secant};
pub use signal::{longitude_distance, longitude_speed};
