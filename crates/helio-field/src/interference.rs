// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Interference Model
// ─────────────────────────────────────────────────────────────────────
//! Scores how an entity's element/phase aligns with the environmental
//! reference point under the current K-Index. Pure arithmetic; the only
//! branch is the elemental coupling lookup.

use serde::Serialize;

use helio_decoder::EnvironmentalVector;
use helio_types::{clamp_unit, norm, ElementType, KIndex};

/// Coupling when both elements are equal.
const COUPLING_SAME: f64 = 1.0;
/// Coupling for a generating pair (either direction).
const COUPLING_GENERATING: f64 = 0.8;
/// Coupling for an overcoming pair (either direction).
const COUPLING_OVERCOMING: f64 = 0.3;
/// Coupling for unrelated elements.
const COUPLING_NEUTRAL: f64 = 0.5;

/// Entity input to the interference model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementPhase {
    pub element: ElementType,
    /// Phase angle in degrees (archetype index × 30).
    pub phase_deg: f64,
}

/// Interference scores for one entity, recomputed fresh per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterferencePattern {
    /// Constructive alignment with the environment, [0, 1].
    pub resonance_index: f64,
    /// Destructive attenuation, [0, 1].
    pub damping_coefficient: f64,
    /// Phase/element agreement, [0, 1].
    pub phase_coherence: f64,
    /// Harmonic separation of the element ranks, 1..=5.
    pub harmonic_order: u8,
}

/// Aggregate scores over an entity set.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AggregateResonance {
    pub total_resonance: f64,
    pub total_damping: f64,
    /// Mean coherence discounted by its spread across the set, [0, 1].
    pub coherence_field: f64,
    pub individual_patterns: Vec<InterferencePattern>,
}

/// Elemental coupling strength between an entity and the environment.
pub fn elemental_coupling(a: ElementType, b: ElementType) -> f64 {
    if a == b {
        COUPLING_SAME
    } else if a.in_generating_pair(b) {
        COUPLING_GENERATING
    } else if a.in_overcoming_pair(b) {
        COUPLING_OVERCOMING
    } else {
        COUPLING_NEUTRAL
    }
}

/// Score one entity against the environmental reference point.
pub fn calculate_interference(
    entity: &ElementPhase,
    env: &EnvironmentalVector,
    k_index: KIndex,
) -> InterferencePattern {
    let phase_delta = (env.phase_deg - entity.phase_deg).abs().to_radians();
    let coupling = elemental_coupling(env.element, entity.element);
    let k_norm = k_index.normalized();

    let phase_alignment = (phase_delta.cos() + 1.0) / 2.0;
    let phase_mismatch = phase_delta.sin();

    let harmonic_order =
        env.element.harmonic_rank().abs_diff(entity.element.harmonic_rank()) + 1;

    InterferencePattern {
        resonance_index: clamp_unit(phase_alignment * coupling * k_norm * env.intensity),
        damping_coefficient: clamp_unit(phase_mismatch * (1.0 - coupling) * (1.0 - k_norm)),
        phase_coherence: clamp_unit((phase_alignment + coupling) / 2.0),
        harmonic_order,
    }
}

/// Score a whole entity set and fold the results.
///
/// An empty set yields all-zero aggregates and no patterns; there is
/// nothing to average.
pub fn aggregate_resonance(
    entities: &[ElementPhase],
    env: &EnvironmentalVector,
    k_index: KIndex,
) -> AggregateResonance {
    if entities.is_empty() {
        return AggregateResonance::default();
    }

    let individual_patterns: Vec<InterferencePattern> = entities
        .iter()
        .map(|e| calculate_interference(e, env, k_index))
        .collect();

    let resonances: Vec<f64> = individual_patterns.iter().map(|p| p.resonance_index).collect();
    let dampings: Vec<f64> = individual_patterns
        .iter()
        .map(|p| p.damping_coefficient)
        .collect();
    let coherences: Vec<f64> = individual_patterns.iter().map(|p| p.phase_coherence).collect();

    let coherence_field =
        norm::mean(&coherences) * (1.0 - norm::variance(&coherences).min(1.0));

    AggregateResonance {
        total_resonance: norm::mean(&resonances),
        total_damping: norm::mean(&dampings),
        coherence_field: clamp_unit(coherence_field),
        individual_patterns,
    }
}
