// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Decoder Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{HelioError, HelioResult};

/// Runtime configuration for the temporal decoder.
///
/// Every formerly magic literal of the cutover search and the intensity
/// model is held here explicitly. Correctness never depends on tuning
/// these; they exist so the search window and tolerance are auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Zodiac epoch: the calendar year anchoring both fixed cycles.
    /// Default: 1900.
    pub epoch_year: i32,

    /// Ecliptic longitude of the energetic-year cutover (Li Chun).
    /// Default: 315.0 degrees.
    pub cutover_longitude_deg: f64,

    /// First day of February opening the cutover search window.
    /// Default: 1.
    pub search_window_start_day: u32,

    /// Last day of February closing the cutover search window.
    /// Default: 10.
    pub search_window_end_day: u32,

    /// Bisection stops once the bracketing interval is below this.
    /// Default: 60 seconds.
    pub bisection_tolerance_secs: i64,

    /// Nominal energetic-year length used by the intensity curve.
    /// Known approximation: the true cutover-to-cutover length varies
    /// around 365.24 days; the curve assumes a flat 365.
    pub nominal_year_days: f64,

    /// Lower bound on environmental intensity.
    /// Default: 0.1.
    pub intensity_floor: f64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            epoch_year: 1900,
            cutover_longitude_deg: 315.0,
            search_window_start_day: 1,
            search_window_end_day: 10,
            bisection_tolerance_secs: 60,
            nominal_year_days: 365.0,
            intensity_floor: 0.1,
        }
    }
}

impl DecoderConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> HelioResult<()> {
        if !(0.0..360.0).contains(&self.cutover_longitude_deg) {
            return Err(HelioError::Config(format!(
                "cutover_longitude_deg must be in [0, 360), got {}",
                self.cutover_longitude_deg
            )));
        }
        if self.search_window_start_day < 1 || self.search_window_end_day > 28 {
            return Err(HelioError::Config(format!(
                "search window must lie within February (1..=28), got {}..={}",
                self.search_window_start_day, self.search_window_end_day
            )));
        }
        if self.search_window_start_day >= self.search_window_end_day {
            return Err(HelioError::Config(format!(
                "search window start {} must precede end {}",
                self.search_window_start_day, self.search_window_end_day
            )));
        }
        if self.bisection_tolerance_secs < 1 {
            return Err(HelioError::Config(format!(
                "bisection_tolerance_secs must be >= 1, got {}",
                self.bisection_tolerance_secs
            )));
        }
        if self.nominal_year_days <= 0.0 {
            return Err(HelioError::Config(format!(
                "nominal_year_days must be > 0, got {}",
                self.nominal_year_days
            )));
        }
        if !(0.0..=1.0).contains(&self.intensity_floor) {
            return Err(HelioError::Config(format!(
                "intensity_floor must be in [0, 1], got {}",
                self.intensity_floor
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> HelioResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| HelioError::Config(format!("JSON parse error: {e}")))
    }
}
