// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Engine Facade
// ─────────────────────────────────────────────────────────────────────
//! Combines the decoder and the field models behind one handle. The
//! only state is the cutover memo; answers depend solely on the
//! arguments and the configuration.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use parking_lot::Mutex;

use helio_decoder::{
    cutover_instant, decode_with_cutovers, environmental_vector, EnvironmentalVector,
    TemporalState, YearProfile,
};
use helio_field::{
    aggregate_resonance, calculate_interference, system_entropy, AggregateResonance,
    InterferencePattern, SystemEntropyReport,
};
use helio_types::{DecoderConfig, HelioResult, KIndex};

use crate::member::FamilyMember;

/// Engine handle. Cheap to share behind an `Arc`; the cutover cache is
/// guarded by a `parking_lot::Mutex` held only for the map access.
pub struct HelioEngine {
    config: DecoderConfig,
    cutovers: Mutex<HashMap<i32, DateTime<Utc>>>,
}

impl HelioEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: DecoderConfig) -> HelioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cutovers: Mutex::new(HashMap::new()),
        })
    }

    /// Engine with the stock configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: DecoderConfig::default(),
            cutovers: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Cutover instant for a calendar year, memoised per engine.
    pub fn cutover(&self, calendar_year: i32) -> HelioResult<DateTime<Utc>> {
        if let Some(&cached) = self.cutovers.lock().get(&calendar_year) {
            return Ok(cached);
        }
        let found = cutover_instant(calendar_year, &self.config)?;
        log::debug!("cutover {calendar_year}: {found} (cache miss)");
        self.cutovers.lock().insert(calendar_year, found);
        Ok(found)
    }

    /// Full symbolic decode of an instant.
    pub fn temporal_state(&self, instant: DateTime<Utc>) -> HelioResult<TemporalState> {
        let year = instant.year();
        let cut = self.cutover(year)?;
        let prev = self.cutover(year - 1)?;
        decode_with_cutovers(instant, cut, prev, &self.config)
    }

    /// Environmental reference point for an instant.
    pub fn environment(&self, instant: DateTime<Utc>) -> HelioResult<EnvironmentalVector> {
        let state = self.temporal_state(instant)?;
        Ok(environmental_vector(&state, &self.config))
    }

    /// Year labels without decoding a specific instant.
    pub fn year_profile(&self, energetic_year: i32) -> YearProfile {
        YearProfile::for_year(energetic_year, self.config.epoch_year)
    }

    /// Year labels for a birth year, with optional cutover precision.
    ///
    /// Without a birth date the year is taken as already energetic (the
    /// birth is assumed past that year's cutover). With one, the full
    /// decode resolves births in the January–February gap.
    pub fn zodiac_for_year(
        &self,
        birth_year: i32,
        birth_date: Option<DateTime<Utc>>,
    ) -> HelioResult<YearProfile> {
        match birth_date {
            Some(date) => {
                let state = self.temporal_state(date)?;
                Ok(self.year_profile(state.energetic_year))
            }
            None => Ok(self.year_profile(birth_year)),
        }
    }

    /// Build a member from a birth instant, resolving the cutover so a
    /// January birth lands in the previous energetic year.
    pub fn register_member(
        &self,
        id: u32,
        name: impl Into<String>,
        birth_instant: DateTime<Utc>,
    ) -> HelioResult<FamilyMember> {
        let state = self.temporal_state(birth_instant)?;
        Ok(FamilyMember::from_energetic_year(
            id,
            name,
            state.energetic_year,
            self.config.epoch_year,
        ))
    }

    /// Build a member from an energetic year known up front.
    pub fn member_from_year(
        &self,
        id: u32,
        name: impl Into<String>,
        energetic_year: i32,
    ) -> FamilyMember {
        FamilyMember::from_energetic_year(id, name, energetic_year, self.config.epoch_year)
    }

    /// Interference of one member against the environment at `instant`.
    pub fn interference(
        &self,
        member: &FamilyMember,
        k_index: KIndex,
        instant: DateTime<Utc>,
    ) -> HelioResult<InterferencePattern> {
        let env = self.environment(instant)?;
        Ok(calculate_interference(&member.element_phase(), &env, k_index))
    }

    /// Aggregate resonance of a whole member set at `instant`.
    pub fn family_resonance(
        &self,
        members: &[FamilyMember],
        k_index: KIndex,
        instant: DateTime<Utc>,
    ) -> HelioResult<AggregateResonance> {
        let env = self.environment(instant)?;
        let phases: Vec<_> = members.iter().map(FamilyMember::element_phase).collect();
        Ok(aggregate_resonance(&phases, &env, k_index))
    }

    /// Pairwise entropy of a member set. Instant-independent.
    pub fn family_entropy(&self, members: &[FamilyMember]) -> SystemEntropyReport {
        let elements: Vec<_> = members.iter().map(|m| m.element).collect();
        system_entropy(&elements)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use helio_decoder::decode_instant;
    use helio_types::{ElementType, ZodiacArchetype};

    use super::*;

    fn utc(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
    }

    fn kp(v: f64) -> KIndex {
        KIndex::new(v).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = DecoderConfig::default();
        config.bisection_tolerance_secs = 0;
        assert!(HelioEngine::new(config).is_err());
    }

    #[test]
    fn test_cached_state_matches_direct_decode() {
        let engine = HelioEngine::with_defaults();
        let t = utc(2024, 7, 1);
        let direct = decode_instant(t, engine.config()).unwrap();
        // Twice, so the second pass hits the memo
        assert_eq!(engine.temporal_state(t).unwrap(), direct);
        assert_eq!(engine.temporal_state(t).unwrap(), direct);
    }

    #[test]
    fn test_cutover_memo_is_stable() {
        let engine = HelioEngine::with_defaults();
        assert_eq!(engine.cutover(2024).unwrap(), engine.cutover(2024).unwrap());
    }

    #[test]
    fn test_register_member_resolves_cutover() {
        let engine = HelioEngine::with_defaults();
        // Mid-January 1987 precedes Li Chun, so the energetic year is 1986
        let january = engine.register_member(1, "Jan", utc(1987, 1, 15)).unwrap();
        assert_eq!(january.energetic_year, 1986);
        assert_eq!(january.archetype, ZodiacArchetype::Tiger);
        assert_eq!(january.element, ElementType::Metal);

        let summer = engine.register_member(2, "Eva", utc(1987, 7, 1)).unwrap();
        assert_eq!(summer.energetic_year, 1987);
        assert_eq!(summer.archetype, ZodiacArchetype::Rabbit);
        assert_eq!(summer.element, ElementType::Metal);
    }

    #[test]
    fn test_zodiac_for_year_with_and_without_date() {
        let engine = HelioEngine::with_defaults();
        // Bare year: taken as already energetic
        let bare = engine.zodiac_for_year(1987, None).unwrap();
        assert_eq!(bare.archetype, ZodiacArchetype::Rabbit);
        assert_eq!(bare.element, ElementType::Metal);
        // Full date in January: previous energetic year wins
        let dated = engine
            .zodiac_for_year(1987, Some(utc(1987, 1, 15)))
            .unwrap();
        assert_eq!(dated.energetic_year, 1986);
        assert_eq!(dated.archetype, ZodiacArchetype::Tiger);
    }

    #[test]
    fn test_interference_matches_field_model() {
        let engine = HelioEngine::with_defaults();
        let t = utc(2024, 7, 1);
        let member = engine.member_from_year(1, "Eva", 1987);
        let env = engine.environment(t).unwrap();
        let expected = calculate_interference(&member.element_phase(), &env, kp(4.0));
        assert_eq!(engine.interference(&member, kp(4.0), t).unwrap(), expected);
    }

    #[test]
    fn test_family_resonance_counts_members() {
        let engine = HelioEngine::with_defaults();
        let members = [
            engine.member_from_year(1, "a", 1987),
            engine.member_from_year(2, "b", 1990),
            engine.member_from_year(3, "c", 2015),
        ];
        let agg = engine
            .family_resonance(&members, kp(5.0), utc(2024, 7, 1))
            .unwrap();
        assert_eq!(agg.individual_patterns.len(), 3);
        assert!((0.0..=1.0).contains(&agg.coherence_field));
    }

    #[test]
    fn test_family_entropy_golden_pairs() {
        let engine = HelioEngine::with_defaults();
        // 1900 → Wood, 1902 → Fire: a generating pair
        let members = [
            engine.member_from_year(1, "a", 1900),
            engine.member_from_year(2, "b", 1902),
        ];
        let report = engine.family_entropy(&members);
        assert_eq!(report.stress_score, 15);
        assert_eq!(report.constructive_count, 1);
    }

    #[test]
    fn test_family_entropy_singleton() {
        let engine = HelioEngine::with_defaults();
        let report = engine.family_entropy(&[engine.member_from_year(1, "solo", 1987)]);
        assert_eq!(report.stress_score, 0);
        assert_eq!(report.stability_index, 1.0);
        assert_eq!(report.dominant_element, Some(ElementType::Metal));
    }
}
