// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Julian Day Conversion and Range Guard
// ─────────────────────────────────────────────────────────────────────

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Utc};

use helio_types::{HelioError, HelioResult};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Day of J2000.0 (2000-01-01T12:00:00 TT).
pub const JD_J2000: f64 = 2_451_545.0;

/// Calendar years the VSOP87D series is trusted for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -1999..=5999;

/// Convert a UTC instant to a Julian Day number.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    JD_UNIX_EPOCH + instant.timestamp_millis() as f64 / 86_400_000.0
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - JD_J2000) / 36_525.0
}

/// Reject instants outside the supported ephemeris range.
///
/// Out-of-range dates must fail loudly rather than silently return
/// longitudes from a diverging series.
pub fn check_range(instant: DateTime<Utc>) -> HelioResult<()> {
    let year = instant.year();
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(HelioError::EphemerisRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        })
    }
}
