use crate::owner::{OwnerPersonality, SecondaryTrait};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoodEventType {
    Win,
    Loss,
    BlowoutWin,
    BlowoutLoss,
    WinningStreak,
    LosingStreak,
    PlayoffClinched,
    PlayoffElimination,
    PlayoffWin,
    PlayoffLoss,
    ChampionshipWin,
    ChampionshipLoss,
    StarSigned,
    StarLost,
    BigTrade,
    TradeBust,
    DraftSuccess,
    DraftBust,
    PositiveMedia,
    NegativeMedia,
    FanProtest,
    FanRally,
    Scandal,
    DemandComplied,
    DemandDefied,
    CoachFired,
    RecordBroken,
}

impl MoodEventType {
    pub fn is_media(&self) -> bool {
        matches!(self, MoodEventType::PositiveMedia | MoodEventType::NegativeMedia)
    }

    pub fn is_fan_reaction(&self) -> bool {
        matches!(self, MoodEventType::FanProtest | MoodEventType::FanRally)
    }

    pub fn is_playoff_tier(&self) -> bool {
        matches!(
            self,
            MoodEventType::PlayoffClinched
                | MoodEventType::PlayoffElimination
                | MoodEventType::PlayoffWin
                | MoodEventType::PlayoffLoss
                | MoodEventType::ChampionshipWin
                | MoodEventType::ChampionshipLoss
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoodEventType::Win => "Won this week",
            MoodEventType::Loss => "Lost this week",
            MoodEventType::BlowoutWin => "Blew out the opponent",
            MoodEventType::BlowoutLoss => "Got blown out",
            MoodEventType::WinningStreak => "Riding a winning streak",
            MoodEventType::LosingStreak => "Stuck in a losing streak",
            MoodEventType::PlayoffClinched => "Clinched a playoff spot",
            MoodEventType::PlayoffElimination => "Eliminated from playoff contention",
            MoodEventType::PlayoffWin => "Won a playoff game",
            MoodEventType::PlayoffLoss => "Lost in the playoffs",
            MoodEventType::ChampionshipWin => "Won the championship",
            MoodEventType::ChampionshipLoss => "Lost the championship game",
            MoodEventType::StarSigned => "Signed a star",
            MoodEventType::StarLost => "Lost a star player",
            MoodEventType::BigTrade => "Pulled off a big trade",
            MoodEventType::TradeBust => "A trade backfired",
            MoodEventType::DraftSuccess => "A draft pick is paying off",
            MoodEventType::DraftBust => "A draft pick busted",
            MoodEventType::PositiveMedia => "Good press coverage",
            MoodEventType::NegativeMedia => "Bad press coverage",
            MoodEventType::FanProtest => "Fans protested outside the stadium",
            MoodEventType::FanRally => "Fans rallied behind the team",
            MoodEventType::Scandal => "The franchise is caught in a scandal",
            MoodEventType::DemandComplied => "The GM followed the owner's demand",
            MoodEventType::DemandDefied => "The GM ignored the owner's demand",
            MoodEventType::CoachFired => "A coach was fired",
            MoodEventType::RecordBroken => "A franchise record fell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodImpact {
    pub mood: i32,
    pub patience: i32,
    pub trust: i32,
}

impl MoodImpact {
    pub const fn new(mood: i32, patience: i32, trust: i32) -> Self {
        MoodImpact { mood, patience, trust }
    }
}

/// Base (mood, patience, trust) shift for each event before personality.
pub fn base_mood_impact(event_type: MoodEventType) -> MoodImpact {
    match event_type {
        MoodEventType::Win => MoodImpact::new(3, 1, 0),
        MoodEventType::Loss => MoodImpact::new(-3, -1, 0),
        MoodEventType::BlowoutWin => MoodImpact::new(6, 2, 1),
        MoodEventType::BlowoutLoss => MoodImpact::new(-7, -3, -1),
        MoodEventType::WinningStreak => MoodImpact::new(8, 3, 2),
        MoodEventType::LosingStreak => MoodImpact::new(-10, -4, -2),
        MoodEventType::PlayoffClinched => MoodImpact::new(12, 6, 3),
        MoodEventType::PlayoffElimination => MoodImpact::new(-10, -5, -2),
        MoodEventType::PlayoffWin => MoodImpact::new(10, 4, 2),
        MoodEventType::PlayoffLoss => MoodImpact::new(-6, -2, 0),
        MoodEventType::ChampionshipWin => MoodImpact::new(25, 15, 10),
        MoodEventType::ChampionshipLoss => MoodImpact::new(-8, -3, 0),
        MoodEventType::StarSigned => MoodImpact::new(8, 3, 3),
        MoodEventType::StarLost => MoodImpact::new(-8, -4, -2),
        MoodEventType::BigTrade => MoodImpact::new(5, 2, 2),
        MoodEventType::TradeBust => MoodImpact::new(-8, -4, -4),
        MoodEventType::DraftSuccess => MoodImpact::new(5, 3, 3),
        MoodEventType::DraftBust => MoodImpact::new(-5, -3, -2),
        MoodEventType::PositiveMedia => MoodImpact::new(4, 1, 1),
        MoodEventType::NegativeMedia => MoodImpact::new(-5, -2, -1),
        MoodEventType::FanProtest => MoodImpact::new(-12, -5, -3),
        MoodEventType::FanRally => MoodImpact::new(8, 3, 1),
        MoodEventType::Scandal => MoodImpact::new(-20, -10, -10),
        MoodEventType::DemandComplied => MoodImpact::new(5, 3, 4),
        MoodEventType::DemandDefied => MoodImpact::new(-10, -5, -8),
        MoodEventType::CoachFired => MoodImpact::new(-2, 0, 1),
        MoodEventType::RecordBroken => MoodImpact::new(6, 2, 1),
    }
}

/// Rescales a base impact for the owner's temperament.
pub fn apply_personality_modifiers(
    event_type: MoodEventType,
    base: MoodImpact,
    personality: &OwnerPersonality,
) -> MoodImpact {
    let traits = &personality.traits;

    let mut mood = base.mood as f64;
    let mut patience = base.patience as f64;
    let mut trust = base.trust as f64;

    // Patient owners shrug off bad news, impatient owners take it harder.
    let patience_factor = ((traits.patience - 50) as f64 / 100.0).clamp(-0.3, 0.3);
    let dampen = |value: f64| if value < 0.0 { value * (1.0 - patience_factor) } else { value };

    mood = dampen(mood);
    patience = dampen(patience);
    trust = dampen(trust);

    if personality.has_trait(SecondaryTrait::PrObsessed) {
        if event_type.is_media() {
            mood *= 1.5;
            patience *= 1.3;
        } else if event_type.is_fan_reaction() {
            mood *= 1.4;
        }
    }

    let title_hungry = personality.has_trait(SecondaryTrait::WinNow)
        || personality.has_trait(SecondaryTrait::ChampionshipOrBust);

    if title_hungry && event_type.is_playoff_tier() {
        mood *= 1.5;
        patience *= 1.3;
    }

    if traits.ego >= 70 && event_type == MoodEventType::Scandal {
        mood *= 1.4;
        trust *= 1.5;
    }

    if traits.loyalty >= 70 && base.mood > 0 && trust > 0.0 {
        trust *= 1.3;
    }

    MoodImpact {
        mood: mood.round() as i32,
        patience: patience.round() as i32,
        trust: trust.round() as i32,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEvent {
    pub event_type: MoodEventType,
    pub week: u32,
    pub description: String,
    pub impact: MoodImpact,
}

impl MoodEvent {
    /// Event with its impact already adjusted for this owner.
    pub fn new(event_type: MoodEventType, week: u32, personality: &OwnerPersonality) -> Self {
        MoodEvent {
            event_type,
            week,
            description: String::from(event_type.description()),
            impact: apply_personality_modifiers(event_type, base_mood_impact(event_type), personality),
        }
    }
}
