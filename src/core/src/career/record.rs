use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReputationTier {
    Unknown,
    Journeyman,
    Respected,
    Elite,
    Legendary,
}

impl ReputationTier {
    pub fn from_reputation(reputation: i32) -> Self {
        match reputation {
            r if r >= 85 => ReputationTier::Legendary,
            r if r >= 70 => ReputationTier::Elite,
            r if r >= 55 => ReputationTier::Respected,
            r if r >= 40 => ReputationTier::Journeyman,
            _ => ReputationTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReputationTier::Unknown => "unknown",
            ReputationTier::Journeyman => "journeyman",
            ReputationTier::Respected => "respected",
            ReputationTier::Elite => "elite",
            ReputationTier::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSeason {
    pub season: u32,
    pub team_id: u32,
    pub wins: u32,
    pub losses: u32,
    pub made_playoffs: bool,
    /// Playoff rounds won.
    pub playoff_round: u32,
    pub championship: bool,
    pub fired: bool,
}

/// One general manager's body of work across every job held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub gm_name: String,
    pub seasons: Vec<CareerSeason>,
}

impl CareerRecord {
    pub fn new(gm_name: String) -> Self {
        CareerRecord {
            gm_name,
            seasons: Vec::new(),
        }
    }

    pub fn record_season(&mut self, season: CareerSeason) {
        self.seasons.push(season);
    }

    pub fn total_seasons(&self) -> u32 {
        self.seasons.len() as u32
    }

    pub fn total_wins(&self) -> u32 {
        self.seasons.iter().map(|s| s.wins).sum()
    }

    pub fn total_losses(&self) -> u32 {
        self.seasons.iter().map(|s| s.losses).sum()
    }

    /// 0.5 for a GM with no games behind them.
    pub fn win_percentage(&self) -> f64 {
        let games = self.total_wins() + self.total_losses();

        if games == 0 {
            return 0.5;
        }

        self.total_wins() as f64 / games as f64
    }

    pub fn playoff_appearances(&self) -> u32 {
        self.seasons.iter().filter(|s| s.made_playoffs).count() as u32
    }

    pub fn championships(&self) -> u32 {
        self.seasons.iter().filter(|s| s.championship).count() as u32
    }

    pub fn times_fired(&self) -> u32 {
        self.seasons.iter().filter(|s| s.fired).count() as u32
    }

    pub fn reputation(&self) -> i32 {
        let score = 50.0 + (self.win_percentage() - 0.5) * 60.0 + 3.0 * self.playoff_appearances() as f64
            + 8.0 * self.championships() as f64
            - 10.0 * self.times_fired() as f64;

        (score.round() as i32).clamp(0, 100)
    }

    pub fn reputation_tier(&self) -> ReputationTier {
        ReputationTier::from_reputation(self.reputation())
    }

    pub fn current_team(&self) -> Option<u32> {
        self.seasons.last().filter(|s| !s.fired).map(|s| s.team_id)
    }
}
