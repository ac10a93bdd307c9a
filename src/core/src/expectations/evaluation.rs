use crate::expectations::{SeasonExpectation, SeasonResult};
use serde::{Deserialize, Serialize};

pub const MET_SCORE: i32 = 60;
pub const EXCEEDED_SCORE: i32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpectationReaction {
    Pleased,
    Satisfied,
    Disappointed,
    Angry,
}

impl ExpectationReaction {
    /// Deliberately not aligned with `MET_SCORE`: a 60-64 season is met
    /// but still leaves the owner disappointed.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => ExpectationReaction::Pleased,
            s if s >= 65 => ExpectationReaction::Satisfied,
            s if s >= 40 => ExpectationReaction::Disappointed,
            _ => ExpectationReaction::Angry,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, ExpectationReaction::Disappointed | ExpectationReaction::Angry)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectationEvaluation {
    pub season: u32,
    pub wins_score: i32,
    pub playoff_score: i32,
    pub goals_score: i32,
    pub score: i32,
    pub met: bool,
    pub exceeded: bool,
    pub reaction: ExpectationReaction,
}

fn score_wins(expectation: &SeasonExpectation, wins: u32) -> i32 {
    if wins >= expectation.target_wins {
        45
    } else if wins >= expectation.minimum_wins {
        35
    } else if wins + 1 == expectation.minimum_wins {
        20
    } else {
        0
    }
}

fn score_playoffs(expectation: &SeasonExpectation, result: &SeasonResult) -> i32 {
    match (expectation.playoffs_expected, result.playoff_result) {
        (true, Some(playoffs)) => {
            let rounds_won = playoffs.rounds_won();

            if rounds_won >= expectation.minimum_playoff_rounds {
                25 + 20
            } else {
                25 + 5 * rounds_won as i32
            }
        }
        (true, None) => 0,
        (false, Some(_)) => 45,
        (false, None) => 25,
    }
}

fn score_goals(expectation: &SeasonExpectation, result: &SeasonResult) -> i32 {
    let required = &expectation.required_goals;

    if required.is_empty() {
        return 20;
    }

    let completed = required.iter().filter(|g| result.completed_goals.contains(g)).count();

    (20.0 * completed as f64 / required.len() as f64).round() as i32
}

pub fn evaluate_season_expectations(expectation: &SeasonExpectation, result: &SeasonResult) -> ExpectationEvaluation {
    let wins_score = score_wins(expectation, result.wins);
    let playoff_score = score_playoffs(expectation, result);
    let goals_score = score_goals(expectation, result);

    let score = (wins_score + playoff_score + goals_score).min(100);

    ExpectationEvaluation {
        season: expectation.season,
        wins_score,
        playoff_score,
        goals_score,
        score,
        met: score >= MET_SCORE,
        exceeded: score >= EXCEEDED_SCORE,
        reaction: ExpectationReaction::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectations::{FlexibilityLevel, SeasonGoal};
    use crate::patience::PlayoffResult;
    use crate::team::TeamPhase;

    fn expectation(playoffs_expected: bool, minimum_playoff_rounds: u32, goals: Vec<SeasonGoal>) -> SeasonExpectation {
        SeasonExpectation {
            season: 3,
            phase: TeamPhase::Competitive,
            minimum_wins: 7,
            target_wins: 9,
            playoffs_expected,
            minimum_playoff_rounds,
            required_goals: goals,
            flexibility: FlexibilityLevel::Moderate,
        }
    }

    fn result(wins: u32, playoff_result: Option<PlayoffResult>, completed_goals: Vec<SeasonGoal>) -> SeasonResult {
        SeasonResult {
            wins,
            losses: 17 - wins,
            playoff_result,
            completed_goals,
        }
    }

    #[test]
    fn test_minimum_wins_without_playoff_pressure_is_met() {
        let expectation = expectation(false, 0, Vec::new());

        let at_minimum = evaluate_season_expectations(&expectation, &result(7, None, Vec::new()));
        assert_eq!(at_minimum.score, 80);
        assert!(at_minimum.met);

        let one_short = evaluate_season_expectations(&expectation, &result(6, None, Vec::new()));
        assert!(one_short.score < at_minimum.score);
        assert_eq!(one_short.score, 65);

        let two_short = evaluate_season_expectations(&expectation, &result(5, None, Vec::new()));
        assert_eq!(two_short.wins_score, 0);
    }

    #[test]
    fn test_playoff_rounds() {
        let expectation = expectation(true, 2, Vec::new());

        let deep_run = evaluate_season_expectations(&expectation, &result(9, Some(PlayoffResult::LostConference), Vec::new()));
        assert_eq!(deep_run.playoff_score, 45);
        assert_eq!(deep_run.score, 100);
        assert!(deep_run.exceeded);

        let early_exit = evaluate_season_expectations(&expectation, &result(9, Some(PlayoffResult::LostDivisional), Vec::new()));
        assert_eq!(early_exit.playoff_score, 30);

        let missed = evaluate_season_expectations(&expectation, &result(9, None, Vec::new()));
        assert_eq!(missed.playoff_score, 0);
        assert_eq!(missed.score, 65);
    }

    #[test]
    fn test_goal_completion_is_proportional() {
        let expectation = expectation(
            false,
            0,
            vec![SeasonGoal::DevelopYoungPlayers, SeasonGoal::StayUnderBudget, SeasonGoal::ImproveFanApproval],
        );

        let evaluation = evaluate_season_expectations(
            &expectation,
            &result(3, None, vec![SeasonGoal::StayUnderBudget, SeasonGoal::WinDivision]),
        );

        assert_eq!(evaluation.goals_score, 7);
        assert_eq!(evaluation.score, 32);
        assert_eq!(evaluation.reaction, ExpectationReaction::Angry);
    }

    #[test]
    fn test_met_but_disappointed() {
        assert_eq!(ExpectationReaction::from_score(62), ExpectationReaction::Disappointed);
        assert_eq!(ExpectationReaction::from_score(65), ExpectationReaction::Satisfied);
        assert_eq!(ExpectationReaction::from_score(80), ExpectationReaction::Pleased);
        assert_eq!(ExpectationReaction::from_score(39), ExpectationReaction::Angry);
    }
}
