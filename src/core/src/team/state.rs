use serde::{Deserialize, Serialize};

pub const REGULAR_SEASON_WEEKS: u32 = 17;

/// What the owner expects of the team this season. Drives the
/// underperformance trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpectationTier {
    Rebuild,
    Development,
    Competitive,
    Contender,
    Championship,
}

impl ExpectationTier {
    /// Win percentage the owner considers par for the tier.
    pub fn baseline_win_percentage(&self) -> f64 {
        match self {
            ExpectationTier::Rebuild => 0.25,
            ExpectationTier::Development => 0.40,
            ExpectationTier::Competitive => 0.50,
            ExpectationTier::Contender => 0.60,
            ExpectationTier::Championship => 0.70,
        }
    }
}

/// Snapshot of the franchise the season simulator hands to the owner systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    pub team_id: u32,
    pub current_losing_streak: u32,
    pub current_winning_streak: u32,
    /// 0-100
    pub fan_approval: i32,
    /// 0-100
    pub media_scrutiny: i32,
    pub wins: u32,
    pub losses: u32,
    pub current_week: u32,
    pub in_playoffs: bool,
    pub expectation_tier: ExpectationTier,
}

impl TeamState {
    pub fn new(team_id: u32, expectation_tier: ExpectationTier) -> Self {
        TeamState {
            team_id,
            current_losing_streak: 0,
            current_winning_streak: 0,
            fan_approval: 60,
            media_scrutiny: 40,
            wins: 0,
            losses: 0,
            current_week: 1,
            in_playoffs: false,
            expectation_tier,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_percentage(&self) -> Option<f64> {
        match self.games_played() {
            0 => None,
            games => Some(self.wins as f64 / games as f64),
        }
    }

    pub fn record_result(&mut self, won: bool) {
        if won {
            self.wins += 1;
            self.current_winning_streak += 1;
            self.current_losing_streak = 0;
        } else {
            self.losses += 1;
            self.current_losing_streak += 1;
            self.current_winning_streak = 0;
        }
    }

    pub fn adjust_fan_approval(&mut self, delta: i32) {
        self.fan_approval = (self.fan_approval + delta).clamp(0, 100);
    }

    pub fn adjust_media_scrutiny(&mut self, delta: i32) {
        self.media_scrutiny = (self.media_scrutiny + delta).clamp(0, 100);
    }

    /// Clears the record for a new regular season, keeping fan sentiment.
    pub fn start_new_season(&mut self, expectation_tier: ExpectationTier) {
        self.wins = 0;
        self.losses = 0;
        self.current_losing_streak = 0;
        self.current_winning_streak = 0;
        self.current_week = 1;
        self.in_playoffs = false;
        self.expectation_tier = expectation_tier;
    }
}
