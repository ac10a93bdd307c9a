use crate::owner::{OwnerPersonality, SecondaryTrait};
use crate::patience::PlayoffResult;
use crate::team::{REGULAR_SEASON_WEEKS, TeamPhase};
use serde::{Deserialize, Serialize};

/// Most playoff rounds a team can win.
pub const MAX_PLAYOFF_ROUNDS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexibilityLevel {
    Strict,
    Moderate,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeasonGoal {
    DevelopYoungPlayers,
    WinDivision,
    ImproveFanApproval,
    StayUnderBudget,
}

impl SeasonGoal {
    pub fn description(&self) -> &'static str {
        match self {
            SeasonGoal::DevelopYoungPlayers => "Give the young core meaningful snaps",
            SeasonGoal::WinDivision => "Win the division",
            SeasonGoal::ImproveFanApproval => "Reconnect with the fan base",
            SeasonGoal::StayUnderBudget => "Keep spending under budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonExpectation {
    pub season: u32,
    pub phase: TeamPhase,
    pub minimum_wins: u32,
    pub target_wins: u32,
    pub playoffs_expected: bool,
    /// Playoff rounds that must be won for the postseason to count as a success.
    pub minimum_playoff_rounds: u32,
    pub required_goals: Vec<SeasonGoal>,
    pub flexibility: FlexibilityLevel,
}

impl SeasonExpectation {
    pub fn is_valid(&self) -> bool {
        self.minimum_wins <= self.target_wins
            && self.target_wins <= REGULAR_SEASON_WEEKS
            && self.minimum_playoff_rounds <= MAX_PLAYOFF_ROUNDS
            && (self.playoffs_expected || self.minimum_playoff_rounds == 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonResult {
    pub wins: u32,
    pub losses: u32,
    pub playoff_result: Option<PlayoffResult>,
    pub completed_goals: Vec<SeasonGoal>,
}

pub fn phase_win_baseline(phase: TeamPhase) -> (i32, i32) {
    match phase {
        TeamPhase::Rebuild => (3, 5),
        TeamPhase::Development => (5, 7),
        TeamPhase::Competitive => (7, 9),
        TeamPhase::Contender => (9, 11),
        TeamPhase::Dynasty => (11, 13),
    }
}

pub fn flexibility_for(personality: &OwnerPersonality) -> FlexibilityLevel {
    let patience = personality.traits.patience;
    let title_or_bust = personality.has_trait(SecondaryTrait::ChampionshipOrBust);

    if patience <= 35 || title_or_bust {
        FlexibilityLevel::Strict
    } else if patience >= 60 {
        FlexibilityLevel::Flexible
    } else {
        FlexibilityLevel::Moderate
    }
}

pub fn generate_season_expectations(
    season: u32,
    phase: TeamPhase,
    roster_strength: i32,
    personality: &OwnerPersonality,
) -> SeasonExpectation {
    let traits = &personality.traits;
    let win_now = personality.has_trait(SecondaryTrait::WinNow);
    let title_or_bust = personality.has_trait(SecondaryTrait::ChampionshipOrBust);

    let (mut minimum, mut target) = phase_win_baseline(phase);

    let roster_adjustment = ((roster_strength - 50) as f64 / 25.0).round() as i32;
    minimum += roster_adjustment;
    target += roster_adjustment;

    if win_now || title_or_bust {
        minimum += 2;
        target += 2;
    }

    if traits.patience <= 30 {
        minimum += 1;
        target += 1;
    } else if traits.patience >= 70 {
        minimum -= 1;
        target -= 1;
    }

    let max_wins = REGULAR_SEASON_WEEKS as i32;
    let target = target.clamp(0, max_wins);
    let minimum = minimum.clamp(0, target);

    let playoffs_expected = phase >= TeamPhase::Competitive || ((win_now || title_or_bust) && phase >= TeamPhase::Development);

    let minimum_playoff_rounds = if playoffs_expected {
        let base = match phase {
            TeamPhase::Dynasty => 2,
            TeamPhase::Contender => 1,
            _ => 0,
        };
        let hunger = if title_or_bust { 2 } else if win_now { 1 } else { 0 };

        (base + hunger).min(MAX_PLAYOFF_ROUNDS)
    } else {
        0
    };

    let mut required_goals = Vec::new();

    if phase <= TeamPhase::Development || personality.has_trait(SecondaryTrait::LongTermThinker) {
        required_goals.push(SeasonGoal::DevelopYoungPlayers);
    }
    if phase >= TeamPhase::Contender {
        required_goals.push(SeasonGoal::WinDivision);
    }
    if personality.has_trait(SecondaryTrait::CommunityFocused) {
        required_goals.push(SeasonGoal::ImproveFanApproval);
    }
    if traits.spending <= 30 {
        required_goals.push(SeasonGoal::StayUnderBudget);
    }

    SeasonExpectation {
        season,
        phase,
        minimum_wins: minimum as u32,
        target_wins: target as u32,
        playoffs_expected,
        minimum_playoff_rounds,
        required_goals,
        flexibility: flexibility_for(personality),
    }
}
