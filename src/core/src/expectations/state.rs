use crate::expectations::{
    ExpectationEvaluation, LongTermExpectation, SeasonExpectation, SeasonResult, UrgencyLevel,
    calculate_urgency, evaluate_season_expectations, generate_long_term_expectation,
    generate_season_expectations, renew_long_term_expectation,
};
use crate::owner::OwnerPersonality;
use crate::team::TeamPhase;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const MAX_EXPECTATION_HISTORY: usize = 20;

const TOLERANCE_REWARD: i32 = 10;
const TOLERANCE_PENALTY: i32 = -15;
const REWARD_MIN_PATIENCE: i32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectationsState {
    pub team_id: u32,
    pub current_season: u32,
    pub season_expectation: SeasonExpectation,
    pub long_term: LongTermExpectation,
    pub urgency: UrgencyLevel,
    pub history: VecDeque<ExpectationEvaluation>,
}

impl ExpectationsState {
    pub fn new(
        team_id: u32,
        season: u32,
        phase: TeamPhase,
        roster_strength: i32,
        personality: &OwnerPersonality,
    ) -> Self {
        let long_term = generate_long_term_expectation(phase, personality);
        let urgency = calculate_urgency(&long_term, long_term.current_year);

        ExpectationsState {
            team_id,
            current_season: season,
            season_expectation: generate_season_expectations(season, phase, roster_strength, personality),
            long_term,
            urgency,
            history: VecDeque::new(),
        }
    }

    /// Scores the finished season, moves the plan forward a year and sets
    /// up next season's targets.
    pub fn advance_expectations(
        &mut self,
        result: &SeasonResult,
        next_phase: TeamPhase,
        next_roster_strength: i32,
        personality: &OwnerPersonality,
    ) -> ExpectationEvaluation {
        let evaluation = evaluate_season_expectations(&self.season_expectation, result);

        self.history.push_back(evaluation.clone());
        while self.history.len() > MAX_EXPECTATION_HISTORY {
            self.history.pop_front();
        }

        if evaluation.exceeded && personality.traits.patience >= REWARD_MIN_PATIENCE {
            self.long_term.adjust_tolerance(TOLERANCE_REWARD);
        } else if evaluation.reaction.is_negative() {
            self.long_term.adjust_tolerance(TOLERANCE_PENALTY);
        }

        self.long_term.current_year += 1;
        if self.long_term.is_finished() {
            self.long_term = renew_long_term_expectation(&self.long_term, next_phase, personality);
        }

        self.current_season += 1;
        self.season_expectation =
            generate_season_expectations(self.current_season, next_phase, next_roster_strength, personality);
        self.urgency = calculate_urgency(&self.long_term, self.long_term.current_year);

        debug!(
            "team: {}, season {} scored {} ({:?}), urgency now {:?}",
            self.team_id, evaluation.season, evaluation.score, evaluation.reaction, self.urgency
        );

        evaluation
    }

    pub fn last_evaluation(&self) -> Option<&ExpectationEvaluation> {
        self.history.back()
    }

    pub fn is_valid(&self) -> bool {
        self.season_expectation.is_valid()
            && self.long_term.is_valid()
            && self.history.len() <= MAX_EXPECTATION_HISTORY
            && self.season_expectation.season == self.current_season
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectations::ExpectationReaction;
    use crate::owner::OwnerTraits;
    use crate::patience::PlayoffResult;

    fn personality(patience: i32) -> OwnerPersonality {
        OwnerPersonality::new(OwnerTraits::new(patience, 50, 50, 50, 50), Vec::new())
    }

    fn result(wins: u32, playoff_result: Option<PlayoffResult>) -> SeasonResult {
        SeasonResult {
            wins,
            losses: 17 - wins,
            playoff_result,
            completed_goals: Vec::new(),
        }
    }

    #[test]
    fn test_new_state_is_valid() {
        let state = ExpectationsState::new(4, 1, TeamPhase::Competitive, 55, &personality(50));

        assert!(state.is_valid());
        assert_eq!(state.long_term.total_years, 3);
        // Two years left at tolerance 50.
        assert_eq!(state.urgency, UrgencyLevel::Moderate);
    }

    #[test]
    fn test_great_season_builds_tolerance() {
        let personality = personality(50);
        let mut state = ExpectationsState::new(4, 1, TeamPhase::Competitive, 50, &personality);

        let evaluation = state.advance_expectations(
            &result(12, Some(PlayoffResult::LostConference)),
            TeamPhase::Contender,
            70,
            &personality,
        );

        assert!(evaluation.exceeded);
        assert_eq!(state.long_term.tolerance, 60);
        assert_eq!(state.long_term.current_year, 2);
        assert_eq!(state.current_season, 2);
        assert_eq!(state.season_expectation.phase, TeamPhase::Contender);
        assert!(state.is_valid());
    }

    #[test]
    fn test_bad_season_costs_tolerance() {
        let personality = personality(50);
        let mut state = ExpectationsState::new(4, 1, TeamPhase::Competitive, 50, &personality);

        let evaluation = state.advance_expectations(&result(3, None), TeamPhase::Development, 40, &personality);

        assert_eq!(evaluation.reaction, ExpectationReaction::Angry);
        assert_eq!(state.long_term.tolerance, 35);
    }

    #[test]
    fn test_finished_plan_is_renewed() {
        let personality = personality(50);
        let mut state = ExpectationsState::new(4, 1, TeamPhase::Competitive, 50, &personality);

        for _ in 0..3 {
            state.advance_expectations(&result(9, Some(PlayoffResult::LostWildCard)), TeamPhase::Competitive, 50, &personality);
        }

        assert_eq!(state.long_term.current_year, 1);
        assert_eq!(state.history.len(), 3);
        assert!(state.is_valid());
    }

    #[test]
    fn test_history_is_capped() {
        let personality = personality(50);
        let mut state = ExpectationsState::new(4, 1, TeamPhase::Competitive, 50, &personality);

        for _ in 0..(MAX_EXPECTATION_HISTORY + 5) {
            state.advance_expectations(&result(9, None), TeamPhase::Competitive, 50, &personality);
        }

        assert_eq!(state.history.len(), MAX_EXPECTATION_HISTORY);
        assert_eq!(state.history.front().unwrap().season, 6);
    }
}
