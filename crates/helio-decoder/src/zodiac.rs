// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Energetic-Year Label Lookup
// ─────────────────────────────────────────────────────────────────────
//! Maps an energetic year to its archetype (12-cycle) and element
//! (10-cycle). Both lookups use floor-mod so years before the epoch
//! index correctly.

use serde::{Deserialize, Serialize};

use helio_types::{ElementType, ZodiacArchetype};

/// Fixed 10-entry element sequence anchored at the epoch year.
pub const ELEMENT_CYCLE: [ElementType; 10] = [
    ElementType::Wood,
    ElementType::Wood,
    ElementType::Fire,
    ElementType::Fire,
    ElementType::Earth,
    ElementType::Earth,
    ElementType::Metal,
    ElementType::Metal,
    ElementType::Water,
    ElementType::Water,
];

/// Year classification independent of any instant within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProfile {
    pub energetic_year: i32,
    pub archetype: ZodiacArchetype,
    pub element: ElementType,
}

impl YearProfile {
    pub fn for_year(energetic_year: i32, epoch_year: i32) -> Self {
        Self {
            energetic_year,
            archetype: archetype_for_year(energetic_year, epoch_year),
            element: element_for_year(energetic_year, epoch_year),
        }
    }
}

/// Archetype for an energetic year: `(year - epoch) mod 12` into the
/// fixed cycle starting at `Rat`.
pub fn archetype_for_year(energetic_year: i32, epoch_year: i32) -> ZodiacArchetype {
    let idx = (energetic_year - epoch_year).rem_euclid(12) as usize;
    ZodiacArchetype::CYCLE[idx]
}

/// Element for an energetic year: `(year - epoch) mod 10` into the
/// fixed 10-entry sequence.
pub fn element_for_year(energetic_year: i32, epoch_year: i32) -> ElementType {
    let idx = (energetic_year - epoch_year).rem_euclid(10) as usize;
    ELEMENT_CYCLE[idx]
}
