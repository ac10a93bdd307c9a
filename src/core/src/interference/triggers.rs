use crate::interference::InterferenceState;
use crate::owner::Owner;
use crate::team::TeamState;
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

/// Performance is only judged once this many weeks have been played.
pub const SEASON_PERFORMANCE_MIN_WEEK: u32 = 8;
pub const EGO_TRIGGER_MIN_EGO: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    LosingStreak,
    FanApproval,
    MediaScrutiny,
    SeasonPerformance,
    Ego,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionTrigger {
    pub trigger_type: TriggerType,
    pub severity: Severity,
    pub description: String,
}

impl InterventionTrigger {
    fn new(trigger_type: TriggerType, severity: Severity, description: String) -> Self {
        InterventionTrigger {
            trigger_type,
            severity,
            description,
        }
    }
}

fn escalate(overage: f64, moderate_at: f64, severe_at: f64) -> Severity {
    if overage >= severe_at {
        Severity::Severe
    } else if overage >= moderate_at {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}

pub fn detect_losing_streak_intervention(owner: &Owner, team: &TeamState) -> Option<InterventionTrigger> {
    let threshold = owner.personality.intervention_triggers.losing_streak_length;

    if team.current_losing_streak < threshold {
        return None;
    }

    let overage = (team.current_losing_streak - threshold) as f64;

    Some(InterventionTrigger::new(
        TriggerType::LosingStreak,
        escalate(overage, 1.0, 3.0),
        format!("The team has lost {} straight games", team.current_losing_streak),
    ))
}

pub fn detect_fan_approval_intervention(owner: &Owner, team: &TeamState) -> Option<InterventionTrigger> {
    let floor = owner.personality.intervention_triggers.fan_approval_floor;

    if team.fan_approval >= floor {
        return None;
    }

    let under = (floor - team.fan_approval) as f64;

    Some(InterventionTrigger::new(
        TriggerType::FanApproval,
        escalate(under, 10.0, 20.0),
        String::from("Fans are turning on the organization"),
    ))
}

pub fn detect_media_scrutiny_intervention(owner: &Owner, team: &TeamState) -> Option<InterventionTrigger> {
    let threshold = owner.personality.intervention_triggers.media_scrutiny_threshold;

    if team.media_scrutiny <= threshold {
        return None;
    }

    let over = (team.media_scrutiny - threshold) as f64;

    Some(InterventionTrigger::new(
        TriggerType::MediaScrutiny,
        escalate(over, 15.0, 30.0),
        String::from("The press is questioning the front office"),
    ))
}

pub fn detect_season_performance_intervention(owner: &Owner, team: &TeamState) -> Option<InterventionTrigger> {
    if team.current_week < SEASON_PERFORMANCE_MIN_WEEK {
        return None;
    }

    let win_percentage = team.win_percentage()?;
    let baseline = team.expectation_tier.baseline_win_percentage();

    // Impatient owners tolerate less underperformance: 0.15 down to 0.10.
    let tolerance = 0.10 + 0.05 * (owner.personality.traits.patience as f64 / 100.0);
    let underperformance = baseline - win_percentage;

    if underperformance <= tolerance {
        return None;
    }

    Some(InterventionTrigger::new(
        TriggerType::SeasonPerformance,
        escalate(underperformance, 0.15, 0.25),
        format!("The team is {}-{}, well short of expectations", team.wins, team.losses),
    ))
}

/// Minimum weeks between interventions before an ego-driven one can fire.
pub fn ego_intervention_gap(ego: i32) -> u32 {
    (8 - ego / 20).max(3) as u32
}

pub fn detect_ego_intervention(
    owner: &Owner,
    team: &TeamState,
    state: &InterferenceState,
    rng: &mut dyn RandomSource,
) -> Option<InterventionTrigger> {
    let ego = owner.personality.traits.ego;

    if ego < EGO_TRIGGER_MIN_EGO {
        return None;
    }

    if let Some(last_week) = state.last_intervention_week {
        if team.current_week.saturating_sub(last_week) < ego_intervention_gap(ego) {
            return None;
        }
    }

    let probability = (ego - EGO_TRIGGER_MIN_EGO) as f64 / 100.0;
    if !rng.chance(probability) {
        return None;
    }

    Some(InterventionTrigger::new(
        TriggerType::Ego,
        Severity::Mild,
        String::from("The owner wants to put a personal stamp on the team"),
    ))
}

/// Runs every detector in priority order: losing streak, fan approval,
/// media scrutiny, season performance, ego.
pub fn detect_all_triggers(
    owner: &Owner,
    team: &TeamState,
    state: &InterferenceState,
    rng: &mut dyn RandomSource,
) -> Vec<InterventionTrigger> {
    [
        detect_losing_streak_intervention(owner, team),
        detect_fan_approval_intervention(owner, team),
        detect_media_scrutiny_intervention(owner, team),
        detect_season_performance_intervention(owner, team),
        detect_ego_intervention(owner, team, state, rng),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Highest severity wins; ties go to the earliest trigger in detection
/// priority order.
pub fn get_most_severe_trigger(triggers: &[InterventionTrigger]) -> Option<&InterventionTrigger> {
    let mut most_severe: Option<&InterventionTrigger> = None;

    for trigger in triggers {
        match most_severe {
            Some(current) if trigger.severity <= current.severity => {}
            _ => most_severe = Some(trigger),
        }
    }

    most_severe
}
