// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Entanglement / Entropy Model
// ─────────────────────────────────────────────────────────────────────
//! Classifies every unordered pair of entities by element relationship
//! and aggregates a system-wide stress score. Classification is
//! order-independent; entropy weights are fixed.

use serde::Serialize;

use helio_types::{clamp_unit, ElementType};

/// Relationship between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InteractionKind {
    Same,
    Constructive,
    Destructive,
    /// Defensive default; every distinct element pair actually lies on
    /// one of the two cycles.
    Neutral,
}

impl InteractionKind {
    /// Fixed entropy weights: Same=5, Constructive=15, Neutral=40,
    /// Destructive=85.
    pub fn entropy_weight(self) -> f64 {
        match self {
            InteractionKind::Same => 5.0,
            InteractionKind::Constructive => 15.0,
            InteractionKind::Neutral => 40.0,
            InteractionKind::Destructive => 85.0,
        }
    }
}

/// One classified pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInteraction {
    pub kind: InteractionKind,
    pub entropy_contribution: f64,
    pub description: String,
}

/// Aggregate over all C(N, 2) pairs of an entity set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemEntropyReport {
    /// Rounded mean entropy contribution across pairs.
    pub stress_score: u32,
    pub total_pairs: usize,
    /// Constructive count with Same pairs folded in.
    pub constructive_count: usize,
    pub destructive_count: usize,
    pub neutral_count: usize,
    /// Most frequent element; ties resolve in the fixed order
    /// Wood, Fire, Earth, Metal, Water. None for an empty set.
    pub dominant_element: Option<ElementType>,
    /// `(constructive + same) / pairs × (1 − mean/100)`, clamped.
    pub stability_index: f64,
    pub interactions: Vec<ElementInteraction>,
}

/// Classify two elements; symmetric in its arguments.
pub fn classify_pair(a: ElementType, b: ElementType) -> ElementInteraction {
    let (kind, description) = if a == b {
        (
            InteractionKind::Same,
            format!("{a} mirrors {b}: reinforcing resonance"),
        )
    } else if a.generates() == b {
        (
            InteractionKind::Constructive,
            format!("{a} generates {b}: nourishing flow"),
        )
    } else if b.generates() == a {
        (
            InteractionKind::Constructive,
            format!("{b} generates {a}: nourishing flow"),
        )
    } else if a.overcomes() == b {
        (
            InteractionKind::Destructive,
            format!("{a} overcomes {b}: controlling tension"),
        )
    } else if b.overcomes() == a {
        (
            InteractionKind::Destructive,
            format!("{b} overcomes {a}: controlling tension"),
        )
    } else {
        (
            InteractionKind::Neutral,
            format!("{a} and {b}: no direct cycle relation"),
        )
    };

    ElementInteraction {
        kind,
        entropy_contribution: kind.entropy_weight(),
        description,
    }
}

/// Most frequent element, ties broken by the fixed iteration order.
fn dominant_element(elements: &[ElementType]) -> Option<ElementType> {
    let mut best: Option<(ElementType, usize)> = None;
    for &candidate in &ElementType::ALL {
        let count = elements.iter().filter(|&&e| e == candidate).count();
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((candidate, count));
        }
    }
    best.map(|(e, _)| e)
}

/// Aggregate entropy across an entity set.
///
/// Fewer than two entities is a defined edge case, not an error: no
/// interactions, zero stress, full stability.
pub fn system_entropy(elements: &[ElementType]) -> SystemEntropyReport {
    if elements.len() < 2 {
        return SystemEntropyReport {
            stress_score: 0,
            total_pairs: 0,
            constructive_count: 0,
            destructive_count: 0,
            neutral_count: 0,
            dominant_element: dominant_element(elements),
            stability_index: 1.0,
            interactions: Vec::new(),
        };
    }

    let mut interactions = Vec::with_capacity(elements.len() * (elements.len() - 1) / 2);
    let mut same = 0usize;
    let mut constructive = 0usize;
    let mut destructive = 0usize;
    let mut neutral = 0usize;

    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let interaction = classify_pair(elements[i], elements[j]);
            match interaction.kind {
                InteractionKind::Same => same += 1,
                InteractionKind::Constructive => constructive += 1,
                InteractionKind::Destructive => destructive += 1,
                InteractionKind::Neutral => neutral += 1,
            }
            interactions.push(interaction);
        }
    }

    let total_pairs = interactions.len();
    let mean_entropy = interactions
        .iter()
        .map(|i| i.entropy_contribution)
        .sum::<f64>()
        / total_pairs as f64;

    let stability_index = clamp_unit(
        (constructive + same) as f64 / total_pairs as f64 * (1.0 - mean_entropy / 100.0),
    );

    SystemEntropyReport {
        stress_score: mean_entropy.round() as u32,
        total_pairs,
        constructive_count: constructive + same,
        destructive_count: destructive,
        neutral_count: neutral,
        dominant_element: dominant_element(elements),
        stability_index,
        interactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ElementType::{Earth, Fire, Metal, Water, Wood};

    #[test]
    fn test_same_pair() {
        let i = classify_pair(Fire, Fire);
        assert_eq!(i.kind, InteractionKind::Same);
        assert_eq!(i.entropy_contribution, 5.0);
    }

    #[test]
    fn test_wood_fire_constructive() {
        let i = classify_pair(Wood, Fire);
        assert_eq!(i.kind, InteractionKind::Constructive);
        assert_eq!(i.entropy_contribution, 15.0);
        assert!(i.description.contains("generates"));
    }

    #[test]
    fn test_wood_earth_destructive() {
        let i = classify_pair(Wood, Earth);
        assert_eq!(i.kind, InteractionKind::Destructive);
        assert_eq!(i.entropy_contribution, 85.0);
    }

    #[test]
    fn test_classification_symmetric_for_all_pairs() {
        for &a in &ElementType::ALL {
            for &b in &ElementType::ALL {
                let ab = classify_pair(a, b);
                let ba = classify_pair(b, a);
                assert_eq!(ab.kind, ba.kind, "{a}/{b}");
                assert_eq!(ab.entropy_contribution, ba.entropy_contribution);
            }
        }
    }

    #[test]
    fn test_every_distinct_pair_lies_on_a_cycle() {
        for &a in &ElementType::ALL {
            for &b in &ElementType::ALL {
                if a != b {
                    assert_ne!(
                        classify_pair(a, b).kind,
                        InteractionKind::Neutral,
                        "{a}/{b} should sit on a cycle"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_set() {
        let report = system_entropy(&[]);
        assert_eq!(report.stress_score, 0);
        assert_eq!(report.total_pairs, 0);
        assert_eq!(report.dominant_element, None);
        assert_eq!(report.stability_index, 1.0);
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn test_singleton_set() {
        let report = system_entropy(&[Metal]);
        assert_eq!(report.stress_score, 0);
        assert_eq!(report.stability_index, 1.0);
        assert_eq!(report.dominant_element, Some(Metal));
    }

    #[test]
    fn test_three_member_family() {
        // Pairs: Wood/Wood = 5, Wood/Fire = 15, Wood/Fire = 15
        let report = system_entropy(&[Wood, Wood, Fire]);
        assert_eq!(report.total_pairs, 3);
        // mean = 35/3 ≈ 11.67 → 12
        assert_eq!(report.stress_score, 12);
        assert_eq!(report.constructive_count, 3); // Same folded in
        assert_eq!(report.destructive_count, 0);
        assert_eq!(report.dominant_element, Some(Wood));
        // 3/3 × (1 − 11.67/100) ≈ 0.8833
        assert!((report.stability_index - (1.0 - 35.0 / 300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_all_destructive_family() {
        // Wood overcomes Earth, Earth overcomes Water, Water... vs Wood:
        // Water generates Wood → constructive. Use a hostile trio instead:
        // Wood/Earth = 85, Wood/Metal = 85 (Metal overcomes Wood),
        // Earth/Metal = 15 (Earth generates Metal)
        let report = system_entropy(&[Wood, Earth, Metal]);
        assert_eq!(report.destructive_count, 2);
        assert_eq!(report.constructive_count, 1);
        // mean = (85+85+15)/3 ≈ 61.67 → 62
        assert_eq!(report.stress_score, 62);
        assert!(report.stability_index < 0.2);
    }

    #[test]
    fn test_dominant_tie_resolved_in_fixed_order() {
        // Two Waters and two Fires: Fire precedes Water in the fixed order
        let report = system_entropy(&[Water, Fire, Water, Fire]);
        assert_eq!(report.dominant_element, Some(Fire));
    }

    #[test]
    fn test_stress_bounded_by_weights() {
        let report = system_entropy(&[Wood, Earth, Wood, Earth]);
        assert!(report.stress_score <= 85);
        assert!((0.0..=1.0).contains(&report.stability_index));
    }
}
