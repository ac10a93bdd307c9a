use crate::utils::{RandomSource, five_step_index};
use serde::{Deserialize, Serialize};

pub const TRAIT_MIN: i32 = 1;
pub const TRAIT_MAX: i32 = 100;

const MAX_SECONDARY_TRAITS: usize = 3;
const SECONDARY_TRAIT_CHANCE: f64 = 0.2;

/// The five core owner traits, each in `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTraits {
    pub patience: i32,
    pub spending: i32,
    pub control: i32,
    pub loyalty: i32,
    pub ego: i32,
}

impl OwnerTraits {
    pub fn new(patience: i32, spending: i32, control: i32, loyalty: i32, ego: i32) -> Self {
        OwnerTraits {
            patience: patience.clamp(TRAIT_MIN, TRAIT_MAX),
            spending: spending.clamp(TRAIT_MIN, TRAIT_MAX),
            control: control.clamp(TRAIT_MIN, TRAIT_MAX),
            loyalty: loyalty.clamp(TRAIT_MIN, TRAIT_MAX),
            ego: ego.clamp(TRAIT_MIN, TRAIT_MAX),
        }
    }

    pub fn value(&self, kind: TraitKind) -> i32 {
        match kind {
            TraitKind::Patience => self.patience,
            TraitKind::Spending => self.spending,
            TraitKind::Control => self.control,
            TraitKind::Loyalty => self.loyalty,
            TraitKind::Ego => self.ego,
        }
    }

    fn all_in_range(&self) -> bool {
        TraitKind::ALL
            .iter()
            .all(|kind| (TRAIT_MIN..=TRAIT_MAX).contains(&self.value(*kind)))
    }
}

impl Default for OwnerTraits {
    fn default() -> Self {
        OwnerTraits::new(50, 50, 50, 50, 50)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitKind {
    Patience,
    Spending,
    Control,
    Loyalty,
    Ego,
}

impl TraitKind {
    pub const ALL: [TraitKind; 5] = [
        TraitKind::Patience,
        TraitKind::Spending,
        TraitKind::Control,
        TraitKind::Loyalty,
        TraitKind::Ego,
    ];

    pub fn describe(&self, value: i32) -> &'static str {
        let index = five_step_index(value);

        match self {
            TraitKind::Patience => [
                "very impatient",
                "impatient",
                "moderately patient",
                "patient",
                "very patient",
            ][index],
            TraitKind::Spending => [
                "very frugal",
                "frugal",
                "budget conscious",
                "free spending",
                "lavish",
            ][index],
            TraitKind::Control => [
                "completely hands-off",
                "hands-off",
                "occasionally involved",
                "hands-on",
                "micromanager",
            ][index],
            TraitKind::Loyalty => [
                "ruthless",
                "fickle",
                "fair",
                "loyal",
                "fiercely loyal",
            ][index],
            TraitKind::Ego => [
                "humble",
                "modest",
                "self-assured",
                "proud",
                "spotlight seeker",
            ][index],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecondaryTrait {
    WinNow,
    LongTermThinker,
    AnalyticsBeliever,
    OldSchool,
    PrObsessed,
    ChampionshipOrBust,
    CommunityFocused,
}

impl SecondaryTrait {
    pub const ALL: [SecondaryTrait; 7] = [
        SecondaryTrait::WinNow,
        SecondaryTrait::LongTermThinker,
        SecondaryTrait::AnalyticsBeliever,
        SecondaryTrait::OldSchool,
        SecondaryTrait::PrObsessed,
        SecondaryTrait::ChampionshipOrBust,
        SecondaryTrait::CommunityFocused,
    ];

    /// Trait that can never coexist with this one.
    pub fn exclusive_with(&self) -> Option<SecondaryTrait> {
        match self {
            SecondaryTrait::WinNow => Some(SecondaryTrait::LongTermThinker),
            SecondaryTrait::LongTermThinker => Some(SecondaryTrait::WinNow),
            SecondaryTrait::AnalyticsBeliever => Some(SecondaryTrait::OldSchool),
            SecondaryTrait::OldSchool => Some(SecondaryTrait::AnalyticsBeliever),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SecondaryTrait::WinNow => "wants results this season",
            SecondaryTrait::LongTermThinker => "builds for the long haul",
            SecondaryTrait::AnalyticsBeliever => "trusts the numbers",
            SecondaryTrait::OldSchool => "trusts the gut and the tape",
            SecondaryTrait::PrObsessed => "lives and dies by the headlines",
            SecondaryTrait::ChampionshipOrBust => "anything short of a title is failure",
            SecondaryTrait::CommunityFocused => "cares about the city and the fans",
        }
    }
}

/// Thresholds past which the owner steps in. Derived once at generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionTriggers {
    /// 1-17
    pub losing_streak_length: u32,
    /// 0-100
    pub fan_approval_floor: i32,
    /// 1-100
    pub media_scrutiny_threshold: i32,
}

impl InterventionTriggers {
    pub fn derive(traits: &OwnerTraits, secondary: &[SecondaryTrait]) -> Self {
        let streak = 2.0 + traits.patience as f64 / 15.0 - (traits.control - 50) as f64 / 25.0;
        let fan_floor = 20 + traits.ego / 4 + (100 - traits.patience) / 5;

        let pr_penalty = if secondary.contains(&SecondaryTrait::PrObsessed) {
            15
        } else {
            0
        };
        let media = 90 - traits.ego / 2 + traits.patience / 10 - pr_penalty;

        InterventionTriggers {
            losing_streak_length: streak.round().clamp(1.0, 17.0) as u32,
            fan_approval_floor: fan_floor.clamp(0, 100),
            media_scrutiny_threshold: media.clamp(1, 100),
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=17).contains(&self.losing_streak_length)
            && (0..=100).contains(&self.fan_approval_floor)
            && (1..=100).contains(&self.media_scrutiny_threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerArchetype {
    Meddler,
    BigSpender,
    PennyPincher,
    PatientBuilder,
    Demanding,
    HandsOff,
    Balanced,
}

impl OwnerArchetype {
    pub fn description(&self) -> &'static str {
        match self {
            OwnerArchetype::Meddler => "The Meddler",
            OwnerArchetype::BigSpender => "The Big Spender",
            OwnerArchetype::PennyPincher => "The Penny Pincher",
            OwnerArchetype::PatientBuilder => "The Patient Builder",
            OwnerArchetype::Demanding => "The Demanding Boss",
            OwnerArchetype::HandsOff => "The Silent Partner",
            OwnerArchetype::Balanced => "The Steady Hand",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPersonality {
    pub traits: OwnerTraits,
    pub secondary_traits: Vec<SecondaryTrait>,
    pub intervention_triggers: InterventionTriggers,
}

impl OwnerPersonality {
    /// Builds a personality with triggers derived from the traits.
    pub fn new(traits: OwnerTraits, secondary_traits: Vec<SecondaryTrait>) -> Self {
        let intervention_triggers = InterventionTriggers::derive(&traits, &secondary_traits);

        OwnerPersonality {
            traits,
            secondary_traits,
            intervention_triggers,
        }
    }

    pub fn has_trait(&self, secondary: SecondaryTrait) -> bool {
        self.secondary_traits.contains(&secondary)
    }

    pub fn archetype(&self) -> OwnerArchetype {
        let t = &self.traits;

        if t.control >= 70 && t.ego >= 60 {
            OwnerArchetype::Meddler
        } else if t.spending >= 75 {
            OwnerArchetype::BigSpender
        } else if t.spending <= 30 {
            OwnerArchetype::PennyPincher
        } else if t.patience >= 70 {
            OwnerArchetype::PatientBuilder
        } else if t.patience <= 30 {
            OwnerArchetype::Demanding
        } else if t.control <= 30 {
            OwnerArchetype::HandsOff
        } else {
            OwnerArchetype::Balanced
        }
    }

    /// Checks trait ranges, duplicate flags, exclusive pairs and triggers.
    pub fn is_valid(&self) -> bool {
        if !self.traits.all_in_range() || !self.intervention_triggers.is_valid() {
            return false;
        }

        for (index, secondary) in self.secondary_traits.iter().enumerate() {
            if self.secondary_traits[index + 1..].contains(secondary) {
                return false;
            }

            if let Some(exclusive) = secondary.exclusive_with() {
                if self.secondary_traits.contains(&exclusive) {
                    return false;
                }
            }
        }

        true
    }
}

/// Rolls fresh owner personalities.
pub struct PersonalityEngine;

impl PersonalityEngine {
    pub fn generate(rng: &mut dyn RandomSource) -> OwnerPersonality {
        let traits = OwnerTraits::new(
            Self::roll_trait(rng),
            Self::roll_trait(rng),
            Self::roll_trait(rng),
            Self::roll_trait(rng),
            Self::roll_trait(rng),
        );

        let secondary = Self::roll_secondary_traits(rng);

        OwnerPersonality::new(traits, secondary)
    }

    /// Average of two uniform draws, so extremes are rarer than the middle.
    fn roll_trait(rng: &mut dyn RandomSource) -> i32 {
        let first = rng.range_int(TRAIT_MIN, TRAIT_MAX);
        let second = rng.range_int(TRAIT_MIN, TRAIT_MAX);

        ((first + second) / 2).clamp(TRAIT_MIN, TRAIT_MAX)
    }

    fn roll_secondary_traits(rng: &mut dyn RandomSource) -> Vec<SecondaryTrait> {
        let mut result: Vec<SecondaryTrait> = Vec::new();

        for candidate in SecondaryTrait::ALL {
            if result.len() >= MAX_SECONDARY_TRAITS {
                break;
            }

            if !rng.chance(SECONDARY_TRAIT_CHANCE) {
                continue;
            }

            let conflicts = candidate
                .exclusive_with()
                .map(|exclusive| result.contains(&exclusive))
                .unwrap_or(false);

            if !conflicts {
                result.push(candidate);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{ScriptedRandom, SimRng};

    #[test]
    fn test_triggers_for_average_owner() {
        let personality = OwnerPersonality::new(OwnerTraits::default(), Vec::new());
        let triggers = personality.intervention_triggers;

        assert_eq!(triggers.losing_streak_length, 5);
        assert_eq!(triggers.fan_approval_floor, 42);
        assert_eq!(triggers.media_scrutiny_threshold, 70);
    }

    #[test]
    fn test_pr_obsessed_lowers_media_threshold() {
        let plain = OwnerPersonality::new(OwnerTraits::default(), Vec::new());
        let pr = OwnerPersonality::new(OwnerTraits::default(), vec![SecondaryTrait::PrObsessed]);

        assert_eq!(
            plain.intervention_triggers.media_scrutiny_threshold - 15,
            pr.intervention_triggers.media_scrutiny_threshold
        );
    }

    #[test]
    fn test_exclusive_traits_invalidate() {
        let personality = OwnerPersonality::new(
            OwnerTraits::default(),
            vec![SecondaryTrait::WinNow, SecondaryTrait::LongTermThinker],
        );
        assert!(!personality.is_valid());

        let personality = OwnerPersonality::new(
            OwnerTraits::default(),
            vec![SecondaryTrait::OldSchool, SecondaryTrait::AnalyticsBeliever],
        );
        assert!(!personality.is_valid());
    }

    #[test]
    fn test_duplicate_traits_invalidate() {
        let personality = OwnerPersonality::new(
            OwnerTraits::default(),
            vec![SecondaryTrait::PrObsessed, SecondaryTrait::PrObsessed],
        );
        assert!(!personality.is_valid());
    }

    #[test]
    fn test_generated_personalities_are_valid() {
        let mut rng = SimRng::from_seed(7);

        for _ in 0..200 {
            let personality = PersonalityEngine::generate(&mut rng);
            assert!(personality.is_valid(), "{:?}", personality);
            assert!(personality.secondary_traits.len() <= 3);
        }
    }

    #[test]
    fn test_generation_skips_conflicting_trait() {
        // Every chance roll succeeds: WinNow is taken, LongTermThinker skipped,
        // AnalyticsBeliever taken, OldSchool skipped, PrObsessed taken.
        let mut rng = ScriptedRandom::constant(0.0);
        let personality = PersonalityEngine::generate(&mut rng);

        assert_eq!(
            personality.secondary_traits,
            vec![
                SecondaryTrait::WinNow,
                SecondaryTrait::AnalyticsBeliever,
                SecondaryTrait::PrObsessed
            ]
        );
    }

    #[test]
    fn test_archetype_ordering() {
        let meddler = OwnerPersonality::new(OwnerTraits::new(50, 90, 80, 50, 70), Vec::new());
        assert_eq!(meddler.archetype(), OwnerArchetype::Meddler);

        let balanced = OwnerPersonality::new(OwnerTraits::default(), Vec::new());
        assert_eq!(balanced.archetype(), OwnerArchetype::Balanced);
    }

    #[test]
    fn test_trait_labels() {
        assert_eq!(TraitKind::Patience.describe(10), "very impatient");
        assert_eq!(TraitKind::Patience.describe(85), "very patient");
        assert_eq!(TraitKind::Control.describe(50), "occasionally involved");
    }
}
