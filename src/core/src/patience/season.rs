use crate::patience::PatienceEventType;
use crate::team::REGULAR_SEASON_WEEKS;
use serde::{Deserialize, Serialize};

/// Win margin against expectation that separates met from exceeded/missed.
pub const EXPECTATION_WIN_MARGIN: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayoffResult {
    LostWildCard,
    LostDivisional,
    LostConference,
    LostChampionship,
    WonChampionship,
}

impl PlayoffResult {
    fn event(&self) -> (PatienceEventType, u32) {
        let week = REGULAR_SEASON_WEEKS;

        match self {
            PlayoffResult::LostWildCard => (PatienceEventType::WildCardLoss, week + 2),
            PlayoffResult::LostDivisional => (PatienceEventType::DivisionalLoss, week + 3),
            PlayoffResult::LostConference => (PatienceEventType::ConferenceLoss, week + 4),
            PlayoffResult::LostChampionship => (PatienceEventType::ChampionshipGameLoss, week + 5),
            PlayoffResult::WonChampionship => (PatienceEventType::ChampionshipWin, week + 5),
        }
    }

    /// Playoff games won on the way to this result.
    pub fn rounds_won(&self) -> u32 {
        match self {
            PlayoffResult::LostWildCard => 0,
            PlayoffResult::LostDivisional => 1,
            PlayoffResult::LostConference => 2,
            PlayoffResult::LostChampionship => 3,
            PlayoffResult::WonChampionship => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub wins: u32,
    pub losses: u32,
    pub expected_wins: u32,
    pub playoff_result: Option<PlayoffResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEvent {
    pub event: PatienceEventType,
    pub week: u32,
}

/// Chronological patience events implied by a finished season.
pub fn generate_season_events(summary: &SeasonSummary) -> Vec<SeasonEvent> {
    let mut events = Vec::new();
    let week = REGULAR_SEASON_WEEKS;

    if summary.wins > summary.losses {
        events.push(SeasonEvent { event: PatienceEventType::WinningSeason, week });
    } else if summary.wins < summary.losses {
        events.push(SeasonEvent { event: PatienceEventType::LosingSeason, week });
    }

    let win_difference = summary.wins as i32 - summary.expected_wins as i32;
    let expectation_event = if win_difference >= EXPECTATION_WIN_MARGIN {
        PatienceEventType::ExceededExpectations
    } else if win_difference <= -EXPECTATION_WIN_MARGIN {
        PatienceEventType::MissedExpectations
    } else {
        PatienceEventType::MetExpectations
    };
    events.push(SeasonEvent { event: expectation_event, week: week + 1 });

    match summary.playoff_result {
        Some(result) => {
            events.push(SeasonEvent { event: PatienceEventType::PlayoffQualified, week: week + 1 });

            let (event, week) = result.event();
            events.push(SeasonEvent { event, week });
        }
        None => {
            events.push(SeasonEvent { event: PatienceEventType::MissedPlayoffs, week: week + 1 });
        }
    }

    events
}
