// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Solar Ephemeris
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Apparent ecliptic longitude of the Sun from VSOP87D Earth
//! coordinates, with nutation and annual aberration applied.
//!
//! Accuracy is a few arcseconds against standard ephemerides, which is
//! what the energetic-year cutover needs near the 315° boundary.

pub mod jd;
pub mod solar;

pub use jd::{julian_day, SUPPORTED_YEARS};
pub use solar::apparent_longitude;
