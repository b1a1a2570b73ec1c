// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Energetic-Year Cutover Search
// ─────────────────────────────────────────────────────────────────────
//! Finds the per-calendar-year Li Chun instant: the moment apparent
//! solar longitude crosses 315°, once per year near Feb 3–5.
//!
//! The ephemeris is treated as a black box and wall-clock time is
//! bisected across the configured February window until the bracket is
//! below the configured tolerance.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use helio_ephemeris::apparent_longitude;
use helio_types::{DecoderConfig, HelioError, HelioResult};

/// Has the longitude passed the cutover? Wraparound-safe: longitudes in
/// the half-circle after the cutover count as crossed.
fn crossed(lon: f64, cutover_deg: f64) -> bool {
    (lon - cutover_deg).rem_euclid(360.0) < 180.0
}

fn february_utc(year: i32, day: u32) -> HelioResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 2, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            HelioError::Numerical(format!("invalid search window date {year}-02-{day:02}"))
        })
}

/// Cutover instant for `calendar_year`, to within the configured
/// tolerance.
pub fn cutover_instant(
    calendar_year: i32,
    config: &DecoderConfig,
) -> HelioResult<DateTime<Utc>> {
    let mut lo = february_utc(calendar_year, config.search_window_start_day)?;
    let mut hi = february_utc(calendar_year, config.search_window_end_day)?;

    // The crossing must be bracketed by the window
    if crossed(apparent_longitude(lo)?, config.cutover_longitude_deg) {
        return Err(HelioError::Numerical(format!(
            "cutover for {calendar_year} precedes the search window"
        )));
    }
    if !crossed(apparent_longitude(hi)?, config.cutover_longitude_deg) {
        return Err(HelioError::Numerical(format!(
            "cutover for {calendar_year} exceeds the search window"
        )));
    }

    let mut iterations = 0u32;
    while (hi - lo).num_seconds() > config.bisection_tolerance_secs {
        let mid = lo + (hi - lo) / 2;
        if crossed(apparent_longitude(mid)?, config.cutover_longitude_deg) {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }

    log::debug!(
        "cutover {calendar_year}: {hi} after {iterations} bisection steps"
    );
    Ok(hi)
}
