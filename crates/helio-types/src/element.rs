// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Five-Element Algebra and Zodiac Archetypes
// ─────────────────────────────────────────────────────────────────────
//! The fixed symbolic set `{Wood, Fire, Earth, Metal, Water}` with its
//! two canonical directed 5-cycles (Generating and Overcoming), and the
//! 12 zodiac archetypes with their phase angles.
//!
//! All coupling and interaction arithmetic in the kernel reduces to
//! lookups on these cycles; both maps are bijective and fixed-point free.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five Wu Xing elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ElementType {
    /// Fixed iteration order used for dominance tie-breaking.
    pub const ALL: [ElementType; 5] = [
        ElementType::Wood,
        ElementType::Fire,
        ElementType::Earth,
        ElementType::Metal,
        ElementType::Water,
    ];

    /// Generating Cycle: Wood → Fire → Earth → Metal → Water → Wood.
    pub fn generates(self) -> ElementType {
        match self {
            ElementType::Wood => ElementType::Fire,
            ElementType::Fire => ElementType::Earth,
            ElementType::Earth => ElementType::Metal,
            ElementType::Metal => ElementType::Water,
            ElementType::Water => ElementType::Wood,
        }
    }

    /// Overcoming Cycle: Wood → Earth → Water → Fire → Metal → Wood.
    pub fn overcomes(self) -> ElementType {
        match self {
            ElementType::Wood => ElementType::Earth,
            ElementType::Earth => ElementType::Water,
            ElementType::Water => ElementType::Fire,
            ElementType::Fire => ElementType::Metal,
            ElementType::Metal => ElementType::Wood,
        }
    }

    /// True if either element generates the other.
    pub fn in_generating_pair(self, other: ElementType) -> bool {
        self.generates() == other || other.generates() == self
    }

    /// True if either element overcomes the other.
    pub fn in_overcoming_pair(self, other: ElementType) -> bool {
        self.overcomes() == other || other.overcomes() == self
    }

    /// Fixed harmonic rank table: Fire=1, Earth=2, Metal=3, Water=4, Wood=5.
    pub fn harmonic_rank(self) -> u8 {
        match self {
            ElementType::Fire => 1,
            ElementType::Earth => 2,
            ElementType::Metal => 3,
            ElementType::Water => 4,
            ElementType::Wood => 5,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElementType::Wood => "Wood",
            ElementType::Fire => "Fire",
            ElementType::Earth => "Earth",
            ElementType::Metal => "Metal",
            ElementType::Water => "Water",
        };
        f.write_str(s)
    }
}

/// One of the 12 zodiac year labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacArchetype {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacArchetype {
    /// Fixed 12-entry sequence starting at `Rat` (epoch-year alignment).
    pub const CYCLE: [ZodiacArchetype; 12] = [
        ZodiacArchetype::Rat,
        ZodiacArchetype::Ox,
        ZodiacArchetype::Tiger,
        ZodiacArchetype::Rabbit,
        ZodiacArchetype::Dragon,
        ZodiacArchetype::Snake,
        ZodiacArchetype::Horse,
        ZodiacArchetype::Goat,
        ZodiacArchetype::Monkey,
        ZodiacArchetype::Rooster,
        ZodiacArchetype::Dog,
        ZodiacArchetype::Pig,
    ];

    /// Position in the fixed cycle, 0..=11.
    pub fn index(self) -> usize {
        match self {
            ZodiacArchetype::Rat => 0,
            ZodiacArchetype::Ox => 1,
            ZodiacArchetype::Tiger => 2,
            ZodiacArchetype::Rabbit => 3,
            ZodiacArchetype::Dragon => 4,
            ZodiacArchetype::Snake => 5,
            ZodiacArchetype::Horse => 6,
            ZodiacArchetype::Goat => 7,
            ZodiacArchetype::Monkey => 8,
            ZodiacArchetype::Rooster => 9,
            ZodiacArchetype::Dog => 10,
            ZodiacArchetype::Pig => 11,
        }
    }

    /// Phase angle in degrees: index × 30, so 0, 30, … 330.
    pub fn phase_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl fmt::Display for ZodiacArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generating_cycle_is_single_5_cycle() {
        for &e in &ElementType::ALL {
            let mut cur = e;
            for step in 1..5 {
                cur = cur.generates();
                assert_ne!(cur, e, "generating cycle returned to {e} after {step} steps");
            }
            assert_eq!(cur.generates(), e);
        }
    }

    #[test]
    fn test_overcoming_cycle_is_single_5_cycle() {
        for &e in &ElementType::ALL {
            let mut cur = e;
            for step in 1..5 {
                cur = cur.overcomes();
                assert_ne!(cur, e, "overcoming cycle returned to {e} after {step} steps");
            }
            assert_eq!(cur.overcomes(), e);
        }
    }

    #[test]
    fn test_no_element_maps_to_itself() {
        for &e in &ElementType::ALL {
            assert_ne!(e.generates(), e);
            assert_ne!(e.overcomes(), e);
        }
    }

    #[test]
    fn test_pair_predicates_symmetric() {
        for &a in &ElementType::ALL {
            for &b in &ElementType::ALL {
                assert_eq!(a.in_generating_pair(b), b.in_generating_pair(a));
                assert_eq!(a.in_overcoming_pair(b), b.in_overcoming_pair(a));
            }
        }
    }

    #[test]
    fn test_harmonic_rank_table() {
        assert_eq!(ElementType::Fire.harmonic_rank(), 1);
        assert_eq!(ElementType::Earth.harmonic_rank(), 2);
        assert_eq!(ElementType::Metal.harmonic_rank(), 3);
        assert_eq!(ElementType::Water.harmonic_rank(), 4);
        assert_eq!(ElementType::Wood.harmonic_rank(), 5);
    }

    #[test]
    fn test_zodiac_phase_angles() {
        assert_eq!(ZodiacArchetype::Rat.phase_deg(), 0.0);
        assert_eq!(ZodiacArchetype::Rabbit.phase_deg(), 90.0);
        assert_eq!(ZodiacArchetype::Pig.phase_deg(), 330.0);
    }

    #[test]
    fn test_zodiac_cycle_indices_consistent() {
        for (i, &a) in ZodiacArchetype::CYCLE.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }
}
