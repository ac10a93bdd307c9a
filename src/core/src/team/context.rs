use crate::team::ExpectationTier;
use serde::{Deserialize, Serialize};

/// Competitive phase of a franchise, from teardown to sustained excellence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamPhase {
    Rebuild,
    Development,
    Competitive,
    Contender,
    Dynasty,
}

impl TeamPhase {
    pub fn expectation_tier(&self) -> ExpectationTier {
        match self {
            TeamPhase::Rebuild => ExpectationTier::Rebuild,
            TeamPhase::Development => ExpectationTier::Development,
            TeamPhase::Competitive => ExpectationTier::Competitive,
            TeamPhase::Contender => ExpectationTier::Contender,
            TeamPhase::Dynasty => ExpectationTier::Championship,
        }
    }

    /// Phase implied by roster strength (0-100) at the start of a season.
    pub fn from_roster_strength(strength: i32) -> Self {
        match strength {
            s if s >= 80 => TeamPhase::Dynasty,
            s if s >= 65 => TeamPhase::Contender,
            s if s >= 50 => TeamPhase::Competitive,
            s if s >= 35 => TeamPhase::Development,
            _ => TeamPhase::Rebuild,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarketSize {
    Small,
    Medium,
    Large,
}

/// Coarse grade of recent results, used for ownership churn and GM retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceTier {
    Terrible,
    Poor,
    Average,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub fn from_win_percentage(win_percentage: f64) -> Self {
        match win_percentage {
            p if p >= 0.70 => PerformanceTier::Excellent,
            p if p >= 0.55 => PerformanceTier::Good,
            p if p >= 0.40 => PerformanceTier::Average,
            p if p >= 0.25 => PerformanceTier::Poor,
            _ => PerformanceTier::Terrible,
        }
    }
}

/// League-level description of a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamContext {
    pub team_id: u32,
    pub name: String,
    pub market_size: MarketSize,
    pub phase: TeamPhase,
    /// 0-100
    pub roster_strength: i32,
    pub recent_performance: PerformanceTier,
    pub gm_performance: PerformanceTier,
}

impl TeamContext {
    pub fn new(team_id: u32, name: String, market_size: MarketSize, roster_strength: i32) -> Self {
        let roster_strength = roster_strength.clamp(0, 100);

        TeamContext {
            team_id,
            name,
            market_size,
            phase: TeamPhase::from_roster_strength(roster_strength),
            roster_strength,
            recent_performance: PerformanceTier::Average,
            gm_performance: PerformanceTier::Average,
        }
    }

    /// Folds a finished season into the context: performance grades follow
    /// the record and the roster drifts by `roster_delta`.
    pub fn apply_season(&mut self, wins: u32, losses: u32, roster_delta: i32) {
        let games = wins + losses;
        if games > 0 {
            let tier = PerformanceTier::from_win_percentage(wins as f64 / games as f64);
            self.recent_performance = tier;
            self.gm_performance = tier;
        }

        self.roster_strength = (self.roster_strength + roster_delta).clamp(0, 100);
        self.phase = TeamPhase::from_roster_strength(self.roster_strength);
    }
}
