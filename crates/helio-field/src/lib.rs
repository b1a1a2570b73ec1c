// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Interference and Entropy Models
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Pairwise interference scoring against the environmental reference
//! point, and the entanglement/entropy classification across an entity
//! set. Deterministic arithmetic on symbolic labels throughout — the
//! vocabulary is physical, the model is not.

pub mod entropy;
pub mod interference;

pub use entropy::{
    classify_pair, system_entropy, ElementInteraction, InteractionKind, SystemEntropyReport,
};
pub use interference::{
    aggregate_resonance, calculate_interference, elemental_coupling, AggregateResonance,
    ElementPhase, InterferencePattern,
};
