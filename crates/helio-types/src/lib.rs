// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Shared Types
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Helio Kernel — the temporal decoding and elemental interference core.

pub mod config;
pub mod element;
pub mod error;
pub mod kindex;
pub mod norm;

pub use config::DecoderConfig;
pub use element::{ElementType, ZodiacArchetype};
pub use error::{HelioError, HelioResult};
pub use kindex::{KIndex, KIndexSummary, StormStatus};
pub use norm::clamp_unit;
