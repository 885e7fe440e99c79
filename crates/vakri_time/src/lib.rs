//! Julian Date ↔ calendar conversions and calendar-day arithmetic.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - UT calendar-day boundary computation (used by the day-by-day scanners)
//! - A `UtcTime` type for broken-down UT timestamps
//!
//! Everything here is UT and pure arithmetic. Time-scale chains (leap
//! seconds, TT/TDB offsets) are the ephemeris backend's concern, not this
//! crate's.

pub mod julian;
pub mod utc_time;

pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, day_bounds, jd_to_calendar};
pub use utc_time::UtcTime;
