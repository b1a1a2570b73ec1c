// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Temporal State Assembly
// ─────────────────────────────────────────────────────────────────────
//! Full decode of a UTC instant: energetic year, year labels, solar
//! term, and day count, plus the reduction to an `EnvironmentalVector`
//! for interference math.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use helio_ephemeris::apparent_longitude;
use helio_types::{DecoderConfig, ElementType, HelioResult, ZodiacArchetype};

use crate::cutover::cutover_instant;
use crate::terms::{progress_in_term, term_index, SolarTerm, SOLAR_TERMS};
use crate::zodiac::YearProfile;

const SECONDS_PER_DAY: i64 = 86_400;

/// Symbolic classification of one instant.
///
/// Derived, never stored: recomputed on every query from the instant and
/// the configuration, which is why this only serializes outward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalState {
    pub energetic_year: i32,
    pub year_archetype: ZodiacArchetype,
    pub year_element: ElementType,
    /// Apparent solar ecliptic longitude, degrees in [0, 360).
    pub solar_longitude_deg: f64,
    pub current_term: &'static SolarTerm,
    pub next_term: &'static SolarTerm,
    /// Fraction of the current term elapsed, [0, 1].
    pub progress_in_term: f64,
    /// 1-based day count since the energetic year's cutover.
    pub day_of_energetic_year: i64,
}

/// Reduction of a `TemporalState` used by the interference model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentalVector {
    pub archetype: ZodiacArchetype,
    pub element: ElementType,
    /// Zodiac phase angle, degrees.
    pub phase_deg: f64,
    /// Seasonal intensity, `max(floor, sin(π · day / year_days))`.
    pub intensity: f64,
}

/// Decode an instant given the two cutovers that can bound it: the
/// query's calendar year and the year before.
pub fn decode_with_cutovers(
    instant: DateTime<Utc>,
    cutover_this_year: DateTime<Utc>,
    cutover_prev_year: DateTime<Utc>,
    config: &DecoderConfig,
) -> HelioResult<TemporalState> {
    let lon = apparent_longitude(instant)?;
    let calendar_year = instant.year();

    let (energetic_year, epoch) = if instant < cutover_this_year {
        (calendar_year - 1, cutover_prev_year)
    } else {
        (calendar_year, cutover_this_year)
    };

    let profile = YearProfile::for_year(energetic_year, config.epoch_year);
    let day = (instant - epoch).num_seconds().div_euclid(SECONDS_PER_DAY) + 1;

    let idx = term_index(lon);
    let current_term = &SOLAR_TERMS[idx];

    Ok(TemporalState {
        energetic_year,
        year_archetype: profile.archetype,
        year_element: profile.element,
        solar_longitude_deg: lon,
        current_term,
        next_term: &SOLAR_TERMS[(idx + 1) % SOLAR_TERMS.len()],
        progress_in_term: progress_in_term(lon, current_term),
        day_of_energetic_year: day,
    })
}

/// Decode an instant, running the cutover search directly.
///
/// Callers issuing many queries should memoise the cutovers and use
/// [`decode_with_cutovers`]; results are identical.
pub fn decode_instant(
    instant: DateTime<Utc>,
    config: &DecoderConfig,
) -> HelioResult<TemporalState> {
    let calendar_year = instant.year();
    let cut = cutover_instant(calendar_year, config)?;
    let prev = cutover_instant(calendar_year - 1, config)?;
    decode_with_cutovers(instant, cut, prev, config)
}

/// Reduce a state to the environmental reference point.
pub fn environmental_vector(
    state: &TemporalState,
    config: &DecoderConfig,
) -> EnvironmentalVector {
    let raw = (std::f64::consts::PI * state.day_of_energetic_year as f64
        / config.nominal_year_days)
        .sin();
    EnvironmentalVector {
        archetype: state.year_archetype,
        element: state.year_element,
        phase_deg: state.year_archetype.phase_deg(),
        intensity: raw.max(config.intensity_floor),
    }
}
