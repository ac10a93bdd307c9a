use crate::career::{CareerRecord, CareerSeason};
use crate::error::FrontOfficeResult;
use crate::expectations::{ExpectationEvaluation, ExpectationsState, SeasonGoal, SeasonResult};
use crate::interference::{
    ComplianceConsequence, DefianceConsequence, DemandContext, ExpiredDemand, InterferenceState, InterferenceSystem,
    OwnerDemand, TriggerType, get_most_severe_trigger,
};
use crate::mood::{
    MoodEvent, MoodEventType, OwnerMoodState, PublicStatement, generate_public_statement,
    should_make_public_statement,
};
use crate::owner::{Owner, TraitKind};
use crate::ownership::{FRESH_PATIENCE_RANGE, FRESH_TRUST_RANGE, LeagueOwnershipState};
use crate::patience::{
    JobSecurityLevel, PatienceEventProcessor, PatienceEventResult, PatienceEventType, PlayoffResult, SeasonSummary,
    generate_season_events,
};
use crate::team::{REGULAR_SEASON_WEEKS, TeamContext, TeamState};
use crate::utils::RandomSource;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Margin that turns a result into a blowout.
pub const BLOWOUT_MARGIN: u32 = 21;
pub const STREAK_EVENT_LENGTH: u32 = 3;
pub const FAN_APPROVAL_LOW: i32 = 25;
pub const FAN_APPROVAL_HIGH: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub points_for: u32,
    pub points_against: u32,
}

impl GameResult {
    pub fn new(points_for: u32, points_against: u32) -> Self {
        GameResult {
            points_for,
            points_against,
        }
    }

    pub fn won(&self) -> bool {
        self.points_for > self.points_against
    }

    pub fn margin(&self) -> u32 {
        self.points_for.abs_diff(self.points_against)
    }

    pub fn is_blowout(&self) -> bool {
        self.margin() >= BLOWOUT_MARGIN
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub week: u32,
    pub game: GameResult,
    pub mood_events: Vec<MoodEventType>,
    pub patience_events: Vec<PatienceEventResult>,
    pub expired_demands: Vec<ExpiredDemand>,
    pub new_demand: Option<OwnerDemand>,
    pub statement: Option<PublicStatement>,
    pub fired: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemandResolution {
    Complied(ComplianceConsequence),
    Defied(DefianceConsequence),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonReport {
    pub season: u32,
    pub wins: u32,
    pub losses: u32,
    pub playoff_result: Option<PlayoffResult>,
    pub patience_events: Vec<PatienceEventResult>,
    pub evaluation: ExpectationEvaluation,
    pub job_security: JobSecurityLevel,
    pub fired: bool,
}

/// Drives one GM-controlled franchise through its seasons, wiring game
/// results into every owner system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseSimulator {
    pub season: u32,
    pub owner: Owner,
    pub team: TeamState,
    pub context: TeamContext,
    pub interference: InterferenceState,
    pub mood: OwnerMoodState,
    pub expectations: ExpectationsState,
    pub career: CareerRecord,
    fired: bool,
}

impl FranchiseSimulator {
    pub fn new(season: u32, owner: Owner, context: TeamContext, career: CareerRecord) -> Self {
        let team_id = context.team_id;

        FranchiseSimulator {
            season,
            team: TeamState::new(team_id, context.phase.expectation_tier()),
            interference: InterferenceState::new(team_id),
            mood: OwnerMoodState::new(team_id),
            expectations: ExpectationsState::new(
                team_id,
                season,
                context.phase,
                context.roster_strength,
                &owner.personality,
            ),
            owner,
            context,
            career,
            fired: false,
        }
    }

    /// Hires the GM into a franchise as the league currently has it. The
    /// owner keeps their mood and demand ledger, but patience and trust
    /// start over for the new GM.
    pub fn from_league(
        league: &LeagueOwnershipState,
        team_id: u32,
        career: CareerRecord,
        rng: &mut dyn RandomSource,
    ) -> FrontOfficeResult<Self> {
        let team = league.team(team_id)?;

        let mut owner = team.owner.clone();
        owner.set_patience_meter(rng.range_int(FRESH_PATIENCE_RANGE.0, FRESH_PATIENCE_RANGE.1));
        owner.set_trust_level(rng.range_int(FRESH_TRUST_RANGE.0, FRESH_TRUST_RANGE.1));

        let mut simulator = Self::new(league.current_season, owner, team.context.clone(), career);
        simulator.mood = team.mood.clone();
        simulator.interference = team.interference.clone();
        simulator.interference.consecutive_defiances = 0;

        debug!(
            "team: {}, GM {} hired, owner patience {}",
            simulator.context.name,
            simulator.career.gm_name,
            simulator.owner.patience_meter()
        );

        Ok(simulator)
    }

    /// Writes the owner-side state back into the league.
    pub fn sync_to_league(&self, league: &mut LeagueOwnershipState) -> FrontOfficeResult<()> {
        let team = league.team_mut(self.context.team_id)?;

        team.owner = self.owner.clone();
        team.context = self.context.clone();
        team.mood = self.mood.clone();
        team.interference = self.interference.clone();

        Ok(())
    }

    /// Picks up a new owner after the franchise changed hands. The GM was
    /// retained, so the record and context carry over.
    pub fn adopt_new_owner(&mut self, league: &LeagueOwnershipState) -> FrontOfficeResult<()> {
        let team = league.team(self.context.team_id)?;

        self.owner = team.owner.clone();
        self.mood = team.mood.clone();
        self.interference = team.interference.clone();
        self.expectations = ExpectationsState::new(
            self.context.team_id,
            self.season,
            self.context.phase,
            self.context.roster_strength,
            &self.owner.personality,
        );

        Ok(())
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Simple score model: stronger rosters score more, with plenty of noise.
    pub fn simulate_game(strength: i32, opponent_strength: i32, rng: &mut dyn RandomSource) -> GameResult {
        let edge = (strength - opponent_strength) / 4;

        let points_for = (21 + edge + rng.range_int(-14, 14)).max(0);
        let points_against = (21 - edge + rng.range_int(-14, 14)).max(0);

        // Overtime goes to the stronger side.
        let (points_for, points_against) = match points_for == points_against {
            true if strength >= opponent_strength => (points_for + 3, points_against),
            true => (points_for, points_against + 3),
            false => (points_for, points_against),
        };

        GameResult::new(points_for as u32, points_against as u32)
    }

    pub fn play_week(&mut self, game: GameResult, context: &DemandContext, rng: &mut dyn RandomSource) -> WeekReport {
        let week = self.team.current_week;
        let won = game.won();

        self.team.record_result(won);

        let previous_fan_approval = self.team.fan_approval;
        self.update_public_sentiment(&game);

        let mut mood_events = Vec::new();
        let mut patience_events = Vec::new();

        mood_events.push(match (won, game.is_blowout()) {
            (true, true) => MoodEventType::BlowoutWin,
            (true, false) => MoodEventType::Win,
            (false, true) => MoodEventType::BlowoutLoss,
            (false, false) => MoodEventType::Loss,
        });

        if game.is_blowout() {
            patience_events.push(if won { PatienceEventType::BigWin } else { PatienceEventType::BadLoss });
        }

        if self.team.current_winning_streak == STREAK_EVENT_LENGTH {
            mood_events.push(MoodEventType::WinningStreak);
            patience_events.push(PatienceEventType::WinningStreak);
        }
        if self.team.current_losing_streak == STREAK_EVENT_LENGTH {
            mood_events.push(MoodEventType::LosingStreak);
            patience_events.push(PatienceEventType::LosingStreak);
        }

        if previous_fan_approval >= FAN_APPROVAL_LOW && self.team.fan_approval < FAN_APPROVAL_LOW {
            mood_events.push(MoodEventType::FanProtest);
            patience_events.push(PatienceEventType::FanApprovalLow);
        }
        if previous_fan_approval < FAN_APPROVAL_HIGH && self.team.fan_approval >= FAN_APPROVAL_HIGH {
            mood_events.push(MoodEventType::FanRally);
            patience_events.push(PatienceEventType::FanApprovalHigh);
        }

        for event_type in &mood_events {
            self.apply_mood_event(*event_type, week, true);
        }

        let patience_events = PatienceEventProcessor::apply_all(&mut self.owner, &patience_events, rng);

        let expired_demands = InterferenceSystem::sweep_expired(&mut self.owner, &mut self.interference, week);
        for _ in &expired_demands {
            self.apply_mood_event(MoodEventType::DemandDefied, week, false);
            mood_events.push(MoodEventType::DemandDefied);
        }

        let mut demand_context = context.clone();
        demand_context.team_id = self.context.team_id;
        demand_context.current_week = week;

        let interference = InterferenceSystem::evaluate_week(
            &mut self.owner,
            &self.team,
            &mut self.interference,
            &demand_context,
            rng,
        );

        if interference.demand.is_some() {
            if let Some(trigger) = get_most_severe_trigger(&interference.triggers) {
                self.owner.reveal_trait(Self::trait_revealed_by(trigger.trigger_type));
            }
        }

        self.mood.apply_mood_decay();
        self.mood.record_week(week);

        let statement = should_make_public_statement(&self.mood)
            .map(|kind| generate_public_statement(&self.owner.name, kind, week, rng));

        if self.owner.wants_gm_fired() {
            self.fired = true;
        }

        debug!(
            "team: {}, week {}: {}-{} ({}-{}), owner mood {}, job security {}",
            self.context.name,
            week,
            game.points_for,
            game.points_against,
            self.team.wins,
            self.team.losses,
            self.mood.describe(),
            self.owner.job_security().description()
        );

        self.team.current_week += 1;

        WeekReport {
            week,
            game,
            mood_events,
            patience_events,
            expired_demands,
            new_demand: interference.demand,
            statement,
            fired: self.fired,
        }
    }

    /// Answers an open owner demand.
    pub fn resolve_demand(&mut self, demand_id: &str, complied: bool) -> FrontOfficeResult<DemandResolution> {
        let week = self.team.current_week;

        let resolution = if complied {
            let consequence = InterferenceSystem::comply(&mut self.owner, &mut self.interference, demand_id, week)?;
            self.apply_mood_event(MoodEventType::DemandComplied, week, false);

            DemandResolution::Complied(consequence)
        } else {
            let consequence = InterferenceSystem::defy(&mut self.owner, &mut self.interference, demand_id, week)?;
            self.apply_mood_event(MoodEventType::DemandDefied, week, false);

            if consequence.fired_immediately {
                info!("owner: {}, fired the GM for defiance", self.owner.name);
                self.fired = true;
            }

            DemandResolution::Defied(consequence)
        };

        Ok(resolution)
    }

    /// Closes the season: playoff outcome, owner verdict, career row.
    pub fn finish_season(
        &mut self,
        playoff_result: Option<PlayoffResult>,
        completed_goals: Vec<SeasonGoal>,
        roster_delta: i32,
        rng: &mut dyn RandomSource,
    ) -> SeasonReport {
        let week = REGULAR_SEASON_WEEKS + 1;
        let wins = self.team.wins;
        let losses = self.team.losses;

        // Anything still open when the season ends counts as ignored.
        InterferenceSystem::sweep_expired(&mut self.owner, &mut self.interference, u32::MAX);

        let summary = SeasonSummary {
            wins,
            losses,
            expected_wins: self.expectations.season_expectation.target_wins,
            playoff_result,
        };

        let season_events: Vec<PatienceEventType> = generate_season_events(&summary).into_iter().map(|e| e.event).collect();
        let patience_events = PatienceEventProcessor::apply_all(&mut self.owner, &season_events, rng);

        match playoff_result {
            Some(PlayoffResult::WonChampionship) => {
                self.apply_mood_event(MoodEventType::PlayoffClinched, week, true);
                self.apply_mood_event(MoodEventType::ChampionshipWin, week, true);
            }
            Some(PlayoffResult::LostChampionship) => {
                self.apply_mood_event(MoodEventType::PlayoffClinched, week, true);
                self.apply_mood_event(MoodEventType::ChampionshipLoss, week, true);
            }
            Some(_) => {
                self.apply_mood_event(MoodEventType::PlayoffClinched, week, true);
                self.apply_mood_event(MoodEventType::PlayoffLoss, week, true);
            }
            None => self.apply_mood_event(MoodEventType::PlayoffElimination, week, true),
        }

        self.context.apply_season(wins, losses, roster_delta);

        let result = SeasonResult {
            wins,
            losses,
            playoff_result,
            completed_goals,
        };
        let evaluation = self.expectations.advance_expectations(
            &result,
            self.context.phase,
            self.context.roster_strength,
            &self.owner.personality,
        );

        let fired = self.fired || self.owner.wants_gm_fired();
        if fired {
            self.owner.previous_gms_fired += 1;
        }

        let championship = playoff_result == Some(PlayoffResult::WonChampionship);

        self.career.record_season(CareerSeason {
            season: self.season,
            team_id: self.context.team_id,
            wins,
            losses,
            made_playoffs: playoff_result.is_some(),
            playoff_round: playoff_result.map(|p| p.rounds_won()).unwrap_or(0),
            championship,
            fired,
        });

        info!(
            "team: {}, season {} finished {}-{}, owner verdict {:?} ({}), job security {}{}",
            self.context.name,
            self.season,
            wins,
            losses,
            evaluation.reaction,
            evaluation.score,
            self.owner.job_security().description(),
            if fired { ", GM fired" } else { "" }
        );

        let report = SeasonReport {
            season: self.season,
            wins,
            losses,
            playoff_result,
            patience_events,
            evaluation,
            job_security: self.owner.job_security(),
            fired,
        };

        self.owner.complete_season(championship);
        self.team.start_new_season(self.context.phase.expectation_tier());
        self.interference.start_new_season();
        self.season += 1;
        self.fired = fired;

        report
    }

    /// Game results move the owner's patience and trust through the mood
    /// system; demand outcomes only move the mood since their consequence
    /// has already been applied.
    fn apply_mood_event(&mut self, event_type: MoodEventType, week: u32, apply_deltas: bool) {
        let event = MoodEvent::new(event_type, week, &self.owner.personality);
        let outcome = self.mood.process_mood_event(event);

        if apply_deltas {
            self.owner.apply_patience_change(outcome.patience_change);
            self.owner.apply_trust_change(outcome.trust_change);
        }
    }

    fn update_public_sentiment(&mut self, game: &GameResult) {
        let (fan_delta, media_delta) = match (game.won(), game.is_blowout()) {
            (true, true) => (4, -3),
            (true, false) => (2, -2),
            (false, true) => (-5, 5),
            (false, false) => (-3, 3),
        };

        self.team.adjust_fan_approval(fan_delta);
        self.team.adjust_media_scrutiny(media_delta);

        if self.team.current_losing_streak >= STREAK_EVENT_LENGTH {
            self.team.adjust_media_scrutiny(3);
        }
    }

    fn trait_revealed_by(trigger_type: TriggerType) -> TraitKind {
        match trigger_type {
            TriggerType::LosingStreak | TriggerType::SeasonPerformance => TraitKind::Patience,
            TriggerType::FanApproval | TriggerType::MediaScrutiny | TriggerType::Ego => TraitKind::Ego,
        }
    }
}
