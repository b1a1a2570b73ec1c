// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Solar Term Table
// ─────────────────────────────────────────────────────────────────────
//! The 24 fixed 15°-wide subdivisions of the ecliptic, anchored at 315°
//! (Li Chun). Exactly one term contains any longitude; the table order
//! follows the energetic year, so index 0 starts the year and the term
//! beginning at 345° is the one whose range wraps past 360°.

use serde::Serialize;

use helio_types::clamp_unit;

/// Angular width of every solar term.
pub const TERM_SPAN_DEG: f64 = 15.0;

/// Longitude anchoring the first term of the energetic year.
pub const TERM_OFFSET_DEG: f64 = 315.0;

/// One named subdivision of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTerm {
    pub name: &'static str,
    pub meaning: &'static str,
    /// Starting ecliptic longitude, a multiple of 15°.
    pub start_deg: f64,
}

impl SolarTerm {
    /// End longitude, possibly wrapped past 360°.
    pub fn end_deg(&self) -> f64 {
        (self.start_deg + TERM_SPAN_DEG).rem_euclid(360.0)
    }

    /// True if `lon` falls in `[start, end)`, handling the wrap term.
    pub fn contains(&self, lon: f64) -> bool {
        let end = self.end_deg();
        if end < self.start_deg {
            lon >= self.start_deg || lon < end
        } else {
            lon >= self.start_deg && lon < end
        }
    }
}

/// The 24 solar terms in energetic-year order.
pub const SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm { name: "Li Chun", meaning: "Beginning of Spring", start_deg: 315.0 },
    SolarTerm { name: "Yu Shui", meaning: "Rain Water", start_deg: 330.0 },
    SolarTerm { name: "Jing Zhe", meaning: "Awakening of Insects", start_deg: 345.0 },
    SolarTerm { name: "Chun Fen", meaning: "Spring Equinox", start_deg: 0.0 },
    SolarTerm { name: "Qing Ming", meaning: "Pure Brightness", start_deg: 15.0 },
    SolarTerm { name: "Gu Yu", meaning: "Grain Rain", start_deg: 30.0 },
    SolarTerm { name: "Li Xia", meaning: "Beginning of Summer", start_deg: 45.0 },
    SolarTerm { name: "Xiao Man", meaning: "Grain Buds", start_deg: 60.0 },
    SolarTerm { name: "Mang Zhong", meaning: "Grain in Ear", start_deg: 75.0 },
    SolarTerm { name: "Xia Zhi", meaning: "Summer Solstice", start_deg: 90.0 },
    SolarTerm { name: "Xiao Shu", meaning: "Minor Heat", start_deg: 105.0 },
    SolarTerm { name: "Da Shu", meaning: "Major Heat", start_deg: 120.0 },
    SolarTerm { name: "Li Qiu", meaning: "Beginning of Autumn", start_deg: 135.0 },
    SolarTerm { name: "Chu Shu", meaning: "End of Heat", start_deg: 150.0 },
    SolarTerm { name: "Bai Lu", meaning: "White Dew", start_deg: 165.0 },
    SolarTerm { name: "Qiu Fen", meaning: "Autumn Equinox", start_deg: 180.0 },
    SolarTerm { name: "Han Lu", meaning: "Cold Dew", start_deg: 195.0 },
    SolarTerm { name: "Shuang Jiang", meaning: "Frost Descent", start_deg: 210.0 },
    SolarTerm { name: "Li Dong", meaning: "Beginning of Winter", start_deg: 225.0 },
    SolarTerm { name: "Xiao Xue", meaning: "Minor Snow", start_deg: 240.0 },
    SolarTerm { name: "Da Xue", meaning: "Major Snow", start_deg: 255.0 },
    SolarTerm { name: "Dong Zhi", meaning: "Winter Solstice", start_deg: 270.0 },
    SolarTerm { name: "Xiao Han", meaning: "Minor Cold", start_deg: 285.0 },
    SolarTerm { name: "Da Han", meaning: "Major Cold", start_deg: 300.0 },
];

/// Index of the term containing `lon` (degrees in [0, 360)).
pub fn term_index(lon: f64) -> usize {
    SOLAR_TERMS
        .iter()
        .position(|t| t.contains(lon))
        // Unreachable for finite longitudes: the 24 ranges tile [0, 360)
        .unwrap_or(0)
}

/// Fraction of the containing term already elapsed, clamped to [0, 1].
///
/// Computed in unwrapped linear space so the 345°→0° term behaves like
/// every other.
pub fn progress_in_term(lon: f64, term: &SolarTerm) -> f64 {
    clamp_unit((lon - term.start_deg).rem_euclid(360.0) / TERM_SPAN_DEG)
}
