use crate::mood::{MoodEvent, MoodEventType};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const MOOD_MIN: f64 = 0.0;
pub const MOOD_MAX: f64 = 100.0;
pub const MOOD_NEUTRAL: f64 = 50.0;
pub const MOOD_DECAY_RATE: f64 = 0.1;

pub const MAX_RECENT_MOOD_EVENTS: usize = 10;
/// One regular season of weekly snapshots.
pub const MAX_WEEKLY_MOOD_SNAPSHOTS: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerMood {
    Furious,
    Unhappy,
    Concerned,
    Neutral,
    Content,
    Happy,
    VeryHappy,
    Ecstatic,
}

impl OwnerMood {
    pub fn from_value(value: f64) -> Self {
        match value {
            v if v >= 90.0 => OwnerMood::Ecstatic,
            v if v >= 78.0 => OwnerMood::VeryHappy,
            v if v >= 65.0 => OwnerMood::Happy,
            v if v >= 55.0 => OwnerMood::Content,
            v if v >= 45.0 => OwnerMood::Neutral,
            v if v >= 35.0 => OwnerMood::Concerned,
            v if v >= 20.0 => OwnerMood::Unhappy,
            _ => OwnerMood::Furious,
        }
    }

    /// What the GM gets to see.
    pub fn label(&self) -> &'static str {
        match self {
            OwnerMood::Ecstatic => "very happy",
            OwnerMood::VeryHappy => "happy",
            OwnerMood::Happy => "pleased",
            OwnerMood::Content => "content",
            OwnerMood::Neutral => "neutral",
            OwnerMood::Concerned => "uneasy",
            OwnerMood::Unhappy => "unhappy",
            OwnerMood::Furious => "very unhappy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSnapshot {
    pub week: u32,
    pub mood_value: f64,
    pub mood: OwnerMood,
}

/// Result of feeding one event through the mood state. The patience and
/// trust deltas are for the caller to apply to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEventOutcome {
    pub previous_mood: OwnerMood,
    pub new_mood: OwnerMood,
    pub mood_changed: bool,
    pub patience_change: i32,
    pub trust_change: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerMoodState {
    pub team_id: u32,
    current_mood: OwnerMood,
    mood_value: f64,
    recent_events: VecDeque<MoodEvent>,
    weekly_history: VecDeque<MoodSnapshot>,
    satisfaction_streak: i32,
}

impl OwnerMoodState {
    pub fn new(team_id: u32) -> Self {
        OwnerMoodState {
            team_id,
            current_mood: OwnerMood::from_value(MOOD_NEUTRAL),
            mood_value: MOOD_NEUTRAL,
            recent_events: VecDeque::with_capacity(MAX_RECENT_MOOD_EVENTS),
            weekly_history: VecDeque::with_capacity(MAX_WEEKLY_MOOD_SNAPSHOTS),
            satisfaction_streak: 0,
        }
    }

    pub fn with_value(team_id: u32, value: f64) -> Self {
        let mut state = Self::new(team_id);
        state.set_mood_value(value);
        state
    }

    pub fn mood_value(&self) -> f64 {
        self.mood_value
    }

    pub fn current_mood(&self) -> OwnerMood {
        self.current_mood
    }

    pub fn satisfaction_streak(&self) -> i32 {
        self.satisfaction_streak
    }

    pub fn recent_events(&self) -> impl Iterator<Item = &MoodEvent> {
        self.recent_events.iter()
    }

    pub fn weekly_history(&self) -> impl Iterator<Item = &MoodSnapshot> {
        self.weekly_history.iter()
    }

    pub fn describe(&self) -> &'static str {
        self.current_mood.label()
    }

    /// The value and its band only ever change together.
    pub fn set_mood_value(&mut self, value: f64) {
        self.mood_value = value.clamp(MOOD_MIN, MOOD_MAX);
        self.current_mood = OwnerMood::from_value(self.mood_value);
    }

    pub fn process_mood_event(&mut self, event: MoodEvent) -> MoodEventOutcome {
        let previous_mood = self.current_mood;
        let impact = event.impact;

        self.set_mood_value(self.mood_value + impact.mood as f64);

        self.satisfaction_streak = match impact.mood {
            m if m > 0 => self.satisfaction_streak.max(0) + 1,
            m if m < 0 => self.satisfaction_streak.min(0) - 1,
            _ => self.satisfaction_streak,
        };

        self.recent_events.push_back(event);
        while self.recent_events.len() > MAX_RECENT_MOOD_EVENTS {
            self.recent_events.pop_front();
        }

        MoodEventOutcome {
            previous_mood,
            new_mood: self.current_mood,
            mood_changed: previous_mood != self.current_mood,
            patience_change: impact.patience,
            trust_change: impact.trust,
        }
    }

    /// Pulls the mood a tenth of the way back to neutral.
    pub fn apply_mood_decay(&mut self) {
        let value = self.mood_value + (MOOD_NEUTRAL - self.mood_value) * MOOD_DECAY_RATE;
        self.set_mood_value(value);
    }

    pub fn record_week(&mut self, week: u32) {
        self.weekly_history.push_back(MoodSnapshot {
            week,
            mood_value: self.mood_value,
            mood: self.current_mood,
        });

        while self.weekly_history.len() > MAX_WEEKLY_MOOD_SNAPSHOTS {
            self.weekly_history.pop_front();
        }
    }

    pub fn count_recent(&self, event_type: MoodEventType) -> usize {
        self.recent_events.iter().filter(|e| e.event_type == event_type).count()
    }

    pub fn is_valid(&self) -> bool {
        (MOOD_MIN..=MOOD_MAX).contains(&self.mood_value)
            && self.current_mood == OwnerMood::from_value(self.mood_value)
            && self.recent_events.len() <= MAX_RECENT_MOOD_EVENTS
            && self.weekly_history.len() <= MAX_WEEKLY_MOOD_SNAPSHOTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodImpact;

    fn event(event_type: MoodEventType, mood: i32) -> MoodEvent {
        MoodEvent {
            event_type,
            week: 1,
            description: String::from(event_type.description()),
            impact: MoodImpact::new(mood, 1, 0),
        }
    }

    #[test]
    fn test_mood_bands() {
        assert_eq!(OwnerMood::from_value(100.0), OwnerMood::Ecstatic);
        assert_eq!(OwnerMood::from_value(90.0), OwnerMood::Ecstatic);
        assert_eq!(OwnerMood::from_value(89.9), OwnerMood::VeryHappy);
        assert_eq!(OwnerMood::from_value(50.0), OwnerMood::Neutral);
        assert_eq!(OwnerMood::from_value(35.0), OwnerMood::Concerned);
        assert_eq!(OwnerMood::from_value(19.9), OwnerMood::Furious);
        assert_eq!(OwnerMood::from_value(0.0).label(), "very unhappy");
    }

    #[test]
    fn test_streak_flips_direction() {
        let mut state = OwnerMoodState::new(1);

        state.process_mood_event(event(MoodEventType::Win, 3));
        assert_eq!(state.satisfaction_streak(), 1);

        state.process_mood_event(event(MoodEventType::Win, 3));
        assert_eq!(state.satisfaction_streak(), 2);

        state.process_mood_event(event(MoodEventType::Loss, -3));
        assert_eq!(state.satisfaction_streak(), -1);

        state.process_mood_event(event(MoodEventType::CoachFired, 0));
        assert_eq!(state.satisfaction_streak(), -1);
    }

    #[test]
    fn test_event_clamps_and_reports() {
        let mut state = OwnerMoodState::with_value(1, 95.0);

        let outcome = state.process_mood_event(event(MoodEventType::ChampionshipWin, 25));
        assert_eq!(state.mood_value(), 100.0);
        assert!(!outcome.mood_changed);
        assert_eq!(outcome.patience_change, 1);

        let outcome = state.process_mood_event(event(MoodEventType::Scandal, -60));
        assert_eq!(outcome.previous_mood, OwnerMood::Ecstatic);
        assert_eq!(outcome.new_mood, OwnerMood::Concerned);
        assert!(state.is_valid());
    }

    #[test]
    fn test_buffers_are_bounded() {
        let mut state = OwnerMoodState::new(1);

        for week in 1..=30 {
            state.process_mood_event(event(MoodEventType::Win, 1));
            state.record_week(week);
        }

        assert_eq!(state.recent_events().count(), MAX_RECENT_MOOD_EVENTS);
        assert_eq!(state.weekly_history().count(), MAX_WEEKLY_MOOD_SNAPSHOTS);
        assert_eq!(state.weekly_history().next().unwrap().week, 14);
        assert!(state.is_valid());
    }

    #[test]
    fn test_decay_converges_without_overshoot() {
        let mut state = OwnerMoodState::with_value(1, 80.0);
        let mut previous = state.mood_value();

        for _ in 0..60 {
            state.apply_mood_decay();
            assert!(state.mood_value() < previous);
            assert!(state.mood_value() >= MOOD_NEUTRAL);
            previous = state.mood_value();
        }

        assert!(state.mood_value() - MOOD_NEUTRAL < 0.1);
        assert_eq!(state.current_mood(), OwnerMood::Neutral);
    }

    #[test]
    fn test_decay_from_below() {
        let mut state = OwnerMoodState::with_value(1, 10.0);
        state.apply_mood_decay();
        assert!((state.mood_value() - 14.0).abs() < 1e-9);
    }
}
