// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Family Member Entity
// ─────────────────────────────────────────────────────────────────────
//! A named entity carrying its energetic birth year and the labels
//! derived from it. Unlike `TemporalState` this is meant to be stored,
//! so it round-trips through serde.

use serde::{Deserialize, Serialize};

use helio_decoder::YearProfile;
use helio_field::ElementPhase;
use helio_types::{ElementType, ZodiacArchetype};

/// One member of an entity set (a family, a team, a cohort).
///
/// The labels are always derived from `energetic_year`; mutate it only
/// through [`FamilyMember::set_energetic_year`] so they stay in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: u32,
    pub name: String,
    pub energetic_year: i32,
    pub archetype: ZodiacArchetype,
    pub element: ElementType,
}

impl FamilyMember {
    /// Build a member from an already-resolved energetic year.
    ///
    /// Callers holding only a birth instant should go through
    /// [`crate::HelioEngine::register_member`], which resolves the
    /// cutover first.
    pub fn from_energetic_year(
        id: u32,
        name: impl Into<String>,
        energetic_year: i32,
        epoch_year: i32,
    ) -> Self {
        let profile = YearProfile::for_year(energetic_year, epoch_year);
        Self {
            id,
            name: name.into(),
            energetic_year,
            archetype: profile.archetype,
            element: profile.element,
        }
    }

    /// Change the birth year and rederive both labels.
    pub fn set_energetic_year(&mut self, energetic_year: i32, epoch_year: i32) {
        let profile = YearProfile::for_year(energetic_year, epoch_year);
        self.energetic_year = energetic_year;
        self.archetype = profile.archetype;
        self.element = profile.element;
    }

    /// Reduction used by the interference model.
    pub fn element_phase(&self) -> ElementPhase {
        ElementPhase {
            element: self.element,
            phase_deg: self.archetype.phase_deg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: i32 = 1900;

    #[test]
    fn test_labels_derived_from_year() {
        let m = FamilyMember::from_energetic_year(1, "Petra", 1987, EPOCH);
        assert_eq!(m.archetype, ZodiacArchetype::Rabbit);
        assert_eq!(m.element, ElementType::Metal);
    }

    #[test]
    fn test_set_year_rederives_labels() {
        let mut m = FamilyMember::from_energetic_year(1, "Jan", 1987, EPOCH);
        m.set_energetic_year(1900, EPOCH);
        assert_eq!(m.archetype, ZodiacArchetype::Rat);
        assert_eq!(m.element, ElementType::Wood);
    }

    #[test]
    fn test_element_phase_tracks_archetype() {
        let m = FamilyMember::from_energetic_year(2, "Eva", 1987, EPOCH);
        // Rabbit is index 3 → 90°
        assert_eq!(m.element_phase().phase_deg, 90.0);
        assert_eq!(m.element_phase().element, ElementType::Metal);
    }

    #[test]
    fn test_serde_round_trip() {
        let m = FamilyMember::from_energetic_year(2, "Eva", 1987, EPOCH);
        let json = serde_json::to_string(&m).unwrap();
        let back: FamilyMember = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
