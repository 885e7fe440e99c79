//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Standard astronomical-almanac algorithm. Valid for the Gregorian
//! calendar; dates before the 1582 reform are interpreted proleptically
//! through the Julian-calendar branch of the inverse conversion.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Day.
///
/// `day` carries the time of day as a fraction (e.g. 1.5 = the 1st, 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Day back to `(year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// UT calendar-day boundaries containing `jd`.
///
/// Returns `(day_start, day_end)` where `day_start` is 00:00 UT of the
/// calendar day containing `jd` and `day_end` is exactly one day later.
pub fn day_bounds(jd: f64) -> (f64, f64) {
    let (year, month, day) = jd_to_calendar(jd);
    let start = calendar_to_jd(year, month, day.floor());
    (start, start + 1.0)
}
