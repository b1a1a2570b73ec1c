// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Temporal Decoder
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Converts a UTC instant into its symbolic year classification using
//! the true astronomical cutover (solar longitude 315°) rather than the
//! Gregorian new year.
//!
//! Pipeline:
//!   - `cutover`: bisection for the per-year Li Chun instant
//!   - `zodiac`: energetic year → archetype + element (fixed cycles)
//!   - `terms`: 24 solar-term subdivisions of the ecliptic
//!   - `state`: `TemporalState` and `EnvironmentalVector` assembly
//!
//! Everything here is a pure function of its explicit arguments; the
//! caller supplies "now" and every other instant.

pub mod cutover;
pub mod state;
pub mod terms;
pub mod zodiac;

pub use cutover::cutover_instant;
pub use state::{
    decode_instant, decode_with_cutovers, environmental_vector, EnvironmentalVector,
    TemporalState,
};
pub use terms::{SolarTerm, SOLAR_TERMS, TERM_SPAN_DEG};
pub use zodiac::{archetype_for_year, element_for_year, YearProfile};
