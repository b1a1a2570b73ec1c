// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Geomagnetic K-Index Types
// ─────────────────────────────────────────────────────────────────────
//! Validated K-Index scalar plus the pure classification arithmetic the
//! space-weather feed layer applies to readings. Retrieval and transport
//! of readings stay outside the kernel; only the reductions live here.
//!
//! K-Index scale (0–9): 0–4 quiet to unsettled, 5 minor storm … 9 extreme.

use serde::{Deserialize, Serialize};

use crate::error::{HelioError, HelioResult};

/// Upper bound of the K-Index scale.
pub const K_INDEX_MAX: f64 = 9.0;

/// Geomagnetic storm status derived from a K-Index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StormStatus {
    Quiet,
    Unsettled,
    Storm,
}

/// A validated K-Index value in [0, 9].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KIndex(f64);

impl KIndex {
    /// Construct from a raw reading.
    ///
    /// Non-finite input is rejected; finite values outside [0, 9] are
    /// clamped with a warning, since upstream feeds occasionally report
    /// slightly out-of-scale estimates.
    pub fn new(value: f64) -> HelioResult<Self> {
        if !value.is_finite() {
            return Err(HelioError::Numerical(format!(
                "K-Index must be finite, got {value}"
            )));
        }
        if !(0.0..=K_INDEX_MAX).contains(&value) {
            log::warn!("K-Index {value} outside [0, 9], clamping");
        }
        Ok(Self(value.clamp(0.0, K_INDEX_MAX)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Normalized to [0, 1] for coupling arithmetic.
    pub fn normalized(self) -> f64 {
        self.0 / K_INDEX_MAX
    }

    /// Storm status: storm at Kp >= 5, unsettled at Kp >= 4, else quiet.
    pub fn storm_status(self) -> StormStatus {
        if self.0 >= 5.0 {
            StormStatus::Storm
        } else if self.0 >= 4.0 {
            StormStatus::Unsettled
        } else {
            StormStatus::Quiet
        }
    }

    /// Human-readable description on the NOAA G-scale.
    pub fn description(self) -> &'static str {
        if self.0 >= 9.0 {
            "Extreme Geomagnetic Storm (G5)"
        } else if self.0 >= 8.0 {
            "Severe Geomagnetic Storm (G4)"
        } else if self.0 >= 7.0 {
            "Strong Geomagnetic Storm (G3)"
        } else if self.0 >= 6.0 {
            "Moderate Geomagnetic Storm (G2)"
        } else if self.0 >= 5.0 {
            "Minor Geomagnetic Storm (G1)"
        } else if self.0 >= 4.0 {
            "Unsettled Conditions"
        } else {
            "Quiet Conditions"
        }
    }
}

/// Reduction of a series of K-Index readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KIndexSummary {
    /// Most recent reading.
    pub latest: KIndex,
    /// Arithmetic mean over the series.
    pub average: f64,
    /// Maximum over the series.
    pub max: f64,
    /// Status of the latest reading.
    pub status: StormStatus,
}

impl KIndexSummary {
    /// Summarise a non-empty series ordered oldest → newest.
    ///
    /// Returns `None` for an empty series; an absent feed is not an error.
    pub fn from_readings(readings: &[KIndex]) -> Option<Self> {
        let latest = *readings.last()?;
        let sum: f64 = readings.iter().map(|k| k.value()).sum();
        let max = readings
            .iter()
            .map(|k| k.value())
            .fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            latest,
            average: sum / readings.len() as f64,
            max,
            status: latest.storm_status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kindex_accepts_scale() {
        assert_eq!(KIndex::new(0.0).unwrap().value(), 0.0);
        assert_eq!(KIndex::new(9.0).unwrap().value(), 9.0);
        assert_eq!(KIndex::new(4.3).unwrap().value(), 4.3);
    }

    #[test]
    fn test_kindex_clamps_out_of_scale() {
        assert_eq!(KIndex::new(11.0).unwrap().value(), 9.0);
        assert_eq!(KIndex::new(-1.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_kindex_rejects_non_finite() {
        assert!(KIndex::new(f64::NAN).is_err());
        assert!(KIndex::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_normalized() {
        assert!((KIndex::new(4.5).unwrap().normalized() - 0.5).abs() < 1e-12);
        assert_eq!(KIndex::new(9.0).unwrap().normalized(), 1.0);
    }

    #[test]
    fn test_storm_status_thresholds() {
        assert_eq!(KIndex::new(3.9).unwrap().storm_status(), StormStatus::Quiet);
        assert_eq!(
            KIndex::new(4.0).unwrap().storm_status(),
            StormStatus::Unsettled
        );
        assert_eq!(KIndex::new(5.0).unwrap().storm_status(), StormStatus::Storm);
        assert_eq!(KIndex::new(9.0).unwrap().storm_status(), StormStatus::Storm);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(KIndex::new(2.0).unwrap().description(), "Quiet Conditions");
        assert_eq!(
            KIndex::new(5.0).unwrap().description(),
            "Minor Geomagnetic Storm (G1)"
        );
        assert_eq!(
            KIndex::new(9.0).unwrap().description(),
            "Extreme Geomagnetic Storm (G5)"
        );
    }

    #[test]
    fn test_summary_empty() {
        assert!(KIndexSummary::from_readings(&[]).is_none());
    }

    #[test]
    fn test_summary_reduction() {
        let readings = [
            KIndex::new(2.0).unwrap(),
            KIndex::new(6.0).unwrap(),
            KIndex::new(4.0).unwrap(),
        ];
        let summary = KIndexSummary::from_readings(&readings).unwrap();
        assert_eq!(summary.latest.value(), 4.0);
        assert!((summary.average - 4.0).abs() < 1e-12);
        assert_eq!(summary.max, 6.0);
        assert_eq!(summary.status, StormStatus::Unsettled);
    }
}
