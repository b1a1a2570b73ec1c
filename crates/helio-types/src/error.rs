// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Helio Kernel failures.
///
/// The taxonomy is deliberately narrow: the core is pure arithmetic, so
/// degenerate inputs (empty or singleton entity sets) are defined edge
/// cases with neutral results, not errors.
#[derive(Error, Debug)]
pub enum HelioError {
    /// Instant outside the supported ephemeris range.
    #[error("ephemeris range error: year {year} outside supported {min}..={max}")]
    EphemerisRange { year: i32, min: i32, max: i32 },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Numerical error (NaN/Inf in computation or invalid calendar math).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type HelioResult<T> = Result<T, HelioError>;
