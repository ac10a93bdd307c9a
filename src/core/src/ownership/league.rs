use crate::error::{FrontOfficeError, FrontOfficeResult};
use crate::interference::InterferenceState;
use crate::mood::OwnerMoodState;
use crate::owner::Owner;
use crate::ownership::{
    OwnershipChangeEvent, OwnershipChangeType, calculate_ownership_change_probability, determine_change_type,
    determine_gm_retention, generate_new_owner,
};
use crate::team::TeamContext;
use crate::utils::RandomSource;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

pub const MAX_OWNERSHIP_HISTORY: usize = 100;

/// First and last names new owners are drawn from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerNamePool {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl OwnerNamePool {
    pub fn new(first_names: Vec<String>, last_names: Vec<String>) -> Self {
        OwnerNamePool {
            first_names,
            last_names,
        }
    }

    pub fn random_name(&self, rng: &mut dyn RandomSource) -> String {
        let first = Self::pick(&self.first_names, rng).unwrap_or("Unnamed");
        let last = Self::pick(&self.last_names, rng).unwrap_or("Owner");

        format!("{} {}", first, last)
    }

    fn pick<'a>(names: &'a [String], rng: &mut dyn RandomSource) -> Option<&'a str> {
        if names.is_empty() {
            return None;
        }

        Some(names[rng.pick_index(names.len())].as_str())
    }
}

/// Everything the league tracks about one franchise's ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOwnership {
    pub owner: Owner,
    pub context: TeamContext,
    pub last_change_season: u32,
    pub mood: OwnerMoodState,
    pub interference: InterferenceState,
}

impl TeamOwnership {
    pub fn new(owner: Owner, context: TeamContext, season: u32) -> Self {
        let team_id = context.team_id;

        TeamOwnership {
            owner,
            context,
            last_change_season: season,
            mood: OwnerMoodState::new(team_id),
            interference: InterferenceState::new(team_id),
        }
    }

    pub fn years_since_change(&self, season: u32) -> u32 {
        season.saturating_sub(self.last_change_season)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueOwnershipState {
    pub current_season: u32,
    pub teams: BTreeMap<u32, TeamOwnership>,
    pub ownership_history: VecDeque<OwnershipChangeEvent>,
    next_owner_id: u32,
}

impl LeagueOwnershipState {
    pub fn new(current_season: u32) -> Self {
        LeagueOwnershipState {
            current_season,
            teams: BTreeMap::new(),
            ownership_history: VecDeque::new(),
            next_owner_id: 1,
        }
    }

    pub fn add_team(&mut self, owner: Owner, context: TeamContext) {
        self.next_owner_id = self.next_owner_id.max(owner.id + 1);
        self.teams.insert(context.team_id, TeamOwnership::new(owner, context, self.current_season));
    }

    pub fn next_owner_id(&mut self) -> u32 {
        let id = self.next_owner_id;
        self.next_owner_id += 1;
        id
    }

    pub fn team(&self, team_id: u32) -> FrontOfficeResult<&TeamOwnership> {
        self.teams.get(&team_id).ok_or(FrontOfficeError::TeamNotFound(team_id))
    }

    pub fn team_mut(&mut self, team_id: u32) -> FrontOfficeResult<&mut TeamOwnership> {
        self.teams.get_mut(&team_id).ok_or(FrontOfficeError::TeamNotFound(team_id))
    }

    pub fn owner(&self, team_id: u32) -> FrontOfficeResult<&Owner> {
        self.team(team_id).map(|t| &t.owner)
    }

    /// Rolls every franchise for a change of hands at the end of a season.
    pub fn process_ownership_changes(
        &mut self,
        names: &OwnerNamePool,
        rng: &mut dyn RandomSource,
    ) -> Vec<OwnershipChangeEvent> {
        let season = self.current_season;
        let team_ids: Vec<u32> = self.teams.keys().copied().collect();

        let mut events = Vec::new();

        for team_id in team_ids {
            let Some(team) = self.teams.get(&team_id) else {
                continue;
            };

            let probability =
                calculate_ownership_change_probability(&team.owner, team.years_since_change(season), &team.context);

            if !rng.chance(probability) {
                continue;
            }

            let change_type = determine_change_type(&team.owner, rng);

            if let Ok(event) = self.execute_ownership_change(team_id, change_type, names, rng) {
                events.push(event);
            }
        }

        debug!("season {}: {} ownership changes", season, events.len());

        events
    }

    /// Replaces the owner of `team_id` and wipes the per-owner state.
    pub fn execute_ownership_change(
        &mut self,
        team_id: u32,
        change_type: OwnershipChangeType,
        names: &OwnerNamePool,
        rng: &mut dyn RandomSource,
    ) -> FrontOfficeResult<OwnershipChangeEvent> {
        let season = self.current_season;
        let new_owner_id = self.next_owner_id();

        let team = self.team_mut(team_id)?;

        let new_owner = generate_new_owner(new_owner_id, names.random_name(rng), team_id, rng);
        let gm_retained = determine_gm_retention(change_type, team.context.gm_performance, &new_owner.personality, rng);

        let event = OwnershipChangeEvent {
            season,
            team_id,
            change_type,
            previous_owner_id: team.owner.id,
            previous_owner_name: team.owner.name.clone(),
            new_owner_id,
            new_owner_name: new_owner.name.clone(),
            gm_retained,
            description: change_type.headline(&team.owner.name, &new_owner.name),
        };

        team.owner = new_owner;
        team.last_change_season = season;
        team.mood = OwnerMoodState::new(team_id);
        team.interference = InterferenceState::new(team_id);

        info!(
            "team: {}, ownership change ({:?}): {}, gm retained: {}",
            team.context.name, change_type, event.description, gm_retained
        );

        self.ownership_history.push_back(event.clone());
        while self.ownership_history.len() > MAX_OWNERSHIP_HISTORY {
            self.ownership_history.pop_front();
        }

        Ok(event)
    }

    /// Closes the season for every owner and moves the league calendar on.
    pub fn complete_season(&mut self, champion_team_id: Option<u32>) {
        for (team_id, team) in self.teams.iter_mut() {
            team.owner.complete_season(champion_team_id == Some(*team_id));
            team.interference.start_new_season();
        }

        self.current_season += 1;
    }

    pub fn is_valid(&self) -> bool {
        self.ownership_history.len() <= MAX_OWNERSHIP_HISTORY
            && self.teams.iter().all(|(team_id, team)| {
                team.owner.team_id == *team_id
                    && team.context.team_id == *team_id
                    && team.owner.is_valid()
                    && team.mood.is_valid()
                    && team.interference.is_valid()
            })
            && self.teams.values().all(|t| t.owner.id < self.next_owner_id)
    }
}
