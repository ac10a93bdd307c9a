use crate::owner::Owner;
use crate::patience::{
    JobSecurityLevel, PatienceEventType, PatienceModifier, apply_patience_change,
    find_patience_modifier, scale_modifier,
};
use crate::utils::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};

const fn additional(event: PatienceEventType, min_impact: i32, max_impact: i32) -> PatienceModifier {
    PatienceModifier {
        event,
        min_impact,
        max_impact,
    }
}

/// Playoff rounds, trades, press and demand outcomes: events the standard
/// patience table does not carry.
pub const ADDITIONAL_EVENT_IMPACTS: [PatienceModifier; 12] = [
    additional(PatienceEventType::PlayoffQualified, 4, 8),
    additional(PatienceEventType::WildCardLoss, -4, -1),
    additional(PatienceEventType::DivisionalLoss, 0, 3),
    additional(PatienceEventType::ConferenceLoss, 3, 6),
    additional(PatienceEventType::ChampionshipGameLoss, 5, 10),
    additional(PatienceEventType::MajorTradeSuccess, 3, 8),
    additional(PatienceEventType::MajorTradeFailure, -8, -3),
    additional(PatienceEventType::PositivePress, 1, 3),
    additional(PatienceEventType::NegativePress, -4, -1),
    additional(PatienceEventType::DemandComplied, 3, 6),
    additional(PatienceEventType::DemandDefied, -12, -6),
    additional(PatienceEventType::CoachFired, -3, 3),
];

fn find_additional_modifier(event: PatienceEventType) -> Option<&'static PatienceModifier> {
    ADDITIONAL_EVENT_IMPACTS.iter().find(|m| m.event == event)
}

/// Looks the event up in the standard table first and only falls back to
/// the additional table when the event is absent there. A row that rolls a
/// zero impact is a real zero, not a miss.
pub fn calculate_event_impact(event: PatienceEventType, owner_patience: i32, random_factor: f64) -> i32 {
    find_patience_modifier(event)
        .or_else(|| find_additional_modifier(event))
        .map(|m| scale_modifier(m, owner_patience, random_factor))
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatienceEventResult {
    pub event_name: String,
    pub impact: i32,
    pub previous_patience: i32,
    pub new_patience: i32,
    pub previous_level: JobSecurityLevel,
    pub new_level: JobSecurityLevel,
    pub level_changed: bool,
    pub would_be_fired: bool,
}

impl PatienceEventResult {
    fn new(event_name: String, current_patience: i32, impact: i32) -> Self {
        let new_patience = apply_patience_change(current_patience, impact);
        let previous_level = JobSecurityLevel::from_value(current_patience);
        let new_level = JobSecurityLevel::from_value(new_patience);

        PatienceEventResult {
            event_name,
            impact,
            previous_patience: current_patience,
            new_patience,
            previous_level,
            new_level,
            level_changed: previous_level != new_level,
            would_be_fired: new_level == JobSecurityLevel::Fired,
        }
    }
}

/// Pure projection of an event onto a patience meter.
pub fn process_patience_event(
    current_patience: i32,
    owner_patience: i32,
    event: PatienceEventType,
    random_factor: f64,
) -> PatienceEventResult {
    let impact = calculate_event_impact(event, owner_patience, random_factor);

    PatienceEventResult::new(event.name().to_string(), current_patience, impact)
}

/// Canonical entry point from game outcomes into the owner's patience meter.
pub struct PatienceEventProcessor;

impl PatienceEventProcessor {
    /// Projects the event without touching the owner.
    pub fn preview(owner: &Owner, event: PatienceEventType, rng: &mut dyn RandomSource) -> PatienceEventResult {
        process_patience_event(
            owner.patience_meter(),
            owner.personality.traits.patience,
            event,
            rng.next_float(),
        )
    }

    pub fn apply(owner: &mut Owner, event: PatienceEventType, rng: &mut dyn RandomSource) -> PatienceEventResult {
        let result = Self::preview(owner, event, rng);

        owner.set_patience_meter(result.new_patience);

        debug!(
            "owner: {}, patience event {} impact {} ({} -> {})",
            owner.name, result.event_name, result.impact, result.previous_patience, result.new_patience
        );

        result
    }

    pub fn apply_all(
        owner: &mut Owner,
        events: &[PatienceEventType],
        rng: &mut dyn RandomSource,
    ) -> Vec<PatienceEventResult> {
        events.iter().map(|event| Self::apply(owner, *event, rng)).collect()
    }

    /// Accepts event names from outside the simulation. Unknown names are a
    /// zero-impact no-op.
    pub fn apply_named(owner: &mut Owner, name: &str, rng: &mut dyn RandomSource) -> PatienceEventResult {
        match PatienceEventType::from_name(name) {
            Some(event) => Self::apply(owner, event, rng),
            None => PatienceEventResult::new(name.to_string(), owner.patience_meter(), 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::{NetWorth, OwnerPersonality, OwnerTraits};
    use crate::utils::ScriptedRandom;

    fn owner(patience_meter: i32) -> Owner {
        Owner::new(
            9,
            String::from("Desmond Achebe"),
            9,
            OwnerPersonality::new(OwnerTraits::default(), Vec::new()),
            patience_meter,
            50,
            NetWorth::Billionaire,
        )
    }

    #[test]
    fn test_primary_table_wins_over_fallback() {
        assert_eq!(calculate_event_impact(PatienceEventType::ChampionshipWin, 50, 0.0), 20);
    }

    #[test]
    fn test_fallback_table_for_additional_events() {
        assert_eq!(calculate_event_impact(PatienceEventType::DemandDefied, 50, 0.0), -12);
        assert_eq!(calculate_event_impact(PatienceEventType::PlayoffQualified, 50, 1.0), 8);
    }

    #[test]
    fn test_zero_roll_in_fallback_is_kept() {
        assert_eq!(calculate_event_impact(PatienceEventType::DivisionalLoss, 50, 0.0), 0);
    }

    #[test]
    fn test_every_event_has_exactly_one_row() {
        for event in PatienceEventType::ALL {
            let primary = find_patience_modifier(event).is_some();
            let fallback = find_additional_modifier(event).is_some();
            assert!(primary ^ fallback, "{:?}", event);
        }
    }

    #[test]
    fn test_level_transition_flags() {
        let result = process_patience_event(36, 50, PatienceEventType::LosingSeason, 0.0);

        assert_eq!(result.previous_level, JobSecurityLevel::WarmSeat);
        assert_eq!(result.new_patience, 21);
        assert_eq!(result.new_level, JobSecurityLevel::HotSeat);
        assert!(result.level_changed);
        assert!(!result.would_be_fired);
    }

    #[test]
    fn test_would_be_fired() {
        let result = process_patience_event(22, 50, PatienceEventType::Scandal, 0.0);
        assert!(result.would_be_fired);
        assert_eq!(result.new_patience, 2);
    }

    #[test]
    fn test_apply_mutates_owner() {
        let mut owner = owner(60);
        let mut rng = ScriptedRandom::constant(0.0);

        let result = PatienceEventProcessor::apply(&mut owner, PatienceEventType::MissedPlayoffs, &mut rng);

        assert_eq!(result.impact, -10);
        assert_eq!(owner.patience_meter(), 50);
    }

    #[test]
    fn test_unknown_named_event_is_noop() {
        let mut owner = owner(60);
        let mut rng = ScriptedRandom::constant(0.5);

        let result = PatienceEventProcessor::apply_named(&mut owner, "mascotControversy", &mut rng);

        assert_eq!(result.impact, 0);
        assert!(!result.level_changed);
        assert_eq!(owner.patience_meter(), 60);
    }
}
