// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Apparent Solar Longitude
// ─────────────────────────────────────────────────────────────────────
//! Geocentric apparent ecliptic longitude of the Sun:
//!
//!   λ_app = (L_earth + 180°) + Δλ_FK5 + Δψ − 20.4898″/R
//!
//! Earth heliocentric coordinates come from the VSOP87D series; nutation
//! in longitude uses the principal IAU 1980 terms. UTC is used directly
//! as the time argument — the TT−UTC offset (~70 s) shifts the result by
//! about 3″, inside the stated tolerance.

use chrono::{DateTime, Utc};

use helio_types::HelioResult;

use crate::jd::{check_range, julian_centuries, julian_day};

/// FK5 frame correction to VSOP87 longitudes, arcseconds.
const FK5_LONGITUDE_CORRECTION_ARCSEC: f64 = -0.090_33;

/// Annual aberration constant, arcseconds (scaled by 1/R).
const ABERRATION_ARCSEC: f64 = -20.489_8;

const ARCSEC_PER_DEG: f64 = 3600.0;

/// Apparent ecliptic longitude of the Sun in degrees, [0, 360).
///
/// Fails with `EphemerisRange` for instants outside the supported span.
pub fn apparent_longitude(instant: DateTime<Utc>) -> HelioResult<f64> {
    check_range(instant)?;
    let jd = julian_day(instant);
    let t = julian_centuries(jd);

    let earth = vsop87::vsop87d::earth(jd);
    let radius_au = earth.distance();

    // Geometric geocentric longitude: Earth heliocentric + 180°
    let mut lon = earth.longitude().to_degrees() + 180.0;

    lon += FK5_LONGITUDE_CORRECTION_ARCSEC / ARCSEC_PER_DEG;
    lon += nutation_in_longitude_deg(t);
    lon += ABERRATION_ARCSEC / ARCSEC_PER_DEG / radius_au;

    Ok(lon.rem_euclid(360.0))
}

/// Nutation in longitude Δψ, degrees. Principal IAU 1980 terms only;
/// the truncation error is under 0.5″.
fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let l_moon = (218.316_5 + 481_267.881_3 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();

    dpsi_arcsec / ARCSEC_PER_DEG
}
