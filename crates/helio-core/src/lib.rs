// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Core Engine
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Facade over the decoder and field models. Owns the validated
//! configuration and a per-year cutover cache so repeated queries do
//! not re-run the bisection search.
//!
//! # Invariants
//!
//! 1. **Stateless answers**: every query is a pure function of the
//!    instant, the configuration, and the entity set. The cutover cache
//!    is a memo, never a source of truth — a cold cache returns
//!    bit-identical results.
//!
//! 2. **Validated on construction**: `HelioEngine::new` rejects an
//!    invalid configuration, so downstream code never re-checks it.

pub mod engine;
pub mod member;

pub use engine::HelioEngine;
pub use member::FamilyMember;
