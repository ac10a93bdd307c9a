use crate::interference::{InterventionTrigger, Severity, TriggerType};
use crate::owner::{Owner, SecondaryTrait};
use crate::team::REGULAR_SEASON_WEEKS;
use crate::utils::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemandType {
    SignPlayer,
    FireCoach,
    DraftPlayer,
    TradeFor,
    Other,
}

impl DemandType {
    pub const ALL: [DemandType; 5] = [
        DemandType::SignPlayer,
        DemandType::FireCoach,
        DemandType::DraftPlayer,
        DemandType::TradeFor,
        DemandType::Other,
    ];

    pub fn base_weight(&self) -> i32 {
        match self {
            DemandType::SignPlayer => 25,
            DemandType::FireCoach => 25,
            DemandType::DraftPlayer => 20,
            DemandType::TradeFor => 20,
            DemandType::Other => 10,
        }
    }

    /// Deadline window in weeks, inclusive.
    pub fn deadline_window(&self) -> (i32, i32) {
        match self {
            DemandType::SignPlayer => (1, 3),
            DemandType::FireCoach => (1, 2),
            DemandType::DraftPlayer => (2, 4),
            DemandType::TradeFor => (2, 4),
            DemandType::Other => (1, 4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDemand {
    pub id: String,
    pub demand_type: DemandType,
    pub description: String,
    pub target_id: Option<u32>,
    pub deadline: u32,
    pub consequence: String,
    pub issued_week: u32,
}

impl OwnerDemand {
    pub fn is_targeted(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn is_overdue(&self, current_week: u32) -> bool {
        current_week > self.deadline
    }

    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.description.is_empty() && self.deadline > self.issued_week
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCandidate {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub overall: i32,
    /// Millions per season.
    pub asking_salary: f64,
    pub is_star: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachCandidate {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub performance_rating: i32,
    pub is_struggling: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectCandidate {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub hype_level: i32,
    pub projected_round: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeTarget {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub overall: i32,
    pub team_id: u32,
    pub is_star: bool,
}

/// Everything the owner can point at when issuing a demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandContext {
    pub team_id: u32,
    pub current_week: u32,
    pub free_agents: Vec<PlayerCandidate>,
    pub coaches: Vec<CoachCandidate>,
    pub prospects: Vec<ProspectCandidate>,
    pub trade_targets: Vec<TradeTarget>,
}

impl DemandContext {
    pub fn new(team_id: u32, current_week: u32) -> Self {
        DemandContext {
            team_id,
            current_week,
            ..Default::default()
        }
    }

    pub fn has_struggling_coach(&self) -> bool {
        self.coaches.iter().any(|c| c.is_struggling)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAction {
    pub action_type: DemandType,
    pub target_id: Option<u32>,
}

/// Targetless demands accept any action of the right type; targeted ones
/// need the exact target.
pub fn is_demand_satisfied(demand: &OwnerDemand, completed: &[CompletedAction]) -> bool {
    completed.iter().any(|action| {
        action.action_type == demand.demand_type
            && match demand.target_id {
                None => true,
                Some(target) => action.target_id == Some(target),
            }
    })
}

fn trigger_bonus(trigger_type: TriggerType, demand_type: DemandType) -> i32 {
    match (trigger_type, demand_type) {
        (TriggerType::LosingStreak, DemandType::FireCoach) => 20,
        (TriggerType::LosingStreak, DemandType::TradeFor) => 10,
        (TriggerType::FanApproval, DemandType::SignPlayer) => 20,
        (TriggerType::FanApproval, DemandType::Other) => 5,
        (TriggerType::MediaScrutiny, DemandType::FireCoach) => 10,
        (TriggerType::MediaScrutiny, DemandType::Other) => 15,
        (TriggerType::SeasonPerformance, DemandType::TradeFor) => 15,
        (TriggerType::SeasonPerformance, DemandType::SignPlayer) => 10,
        (TriggerType::Ego, DemandType::Other) => 20,
        (TriggerType::Ego, DemandType::SignPlayer) => 10,
        _ => 0,
    }
}

fn personality_adjustment(owner: &Owner, demand_type: DemandType) -> i32 {
    let personality = &owner.personality;
    let traits = &personality.traits;

    let mut adjustment = 0;

    match demand_type {
        DemandType::FireCoach => {
            if traits.patience < 30 {
                adjustment += 15;
            }
            if personality.has_trait(SecondaryTrait::AnalyticsBeliever) {
                adjustment -= 15;
            }
            if personality.has_trait(SecondaryTrait::OldSchool) {
                adjustment += 10;
            }
        }
        DemandType::SignPlayer => {
            if traits.spending >= 70 {
                adjustment += 15;
            }
            if personality.has_trait(SecondaryTrait::WinNow) {
                adjustment += 10;
            }
            if personality.has_trait(SecondaryTrait::PrObsessed) {
                adjustment += 10;
            }
        }
        DemandType::TradeFor => {
            if traits.spending >= 70 {
                adjustment += 10;
            }
            if personality.has_trait(SecondaryTrait::WinNow) {
                adjustment += 10;
            }
        }
        DemandType::DraftPlayer => {
            if personality.has_trait(SecondaryTrait::LongTermThinker) {
                adjustment += 15;
            }
        }
        DemandType::Other => {}
    }

    adjustment
}

/// Lottery weights for each demand type, infeasible categories zeroed.
pub fn calculate_demand_weights(
    owner: &Owner,
    trigger_type: TriggerType,
    context: &DemandContext,
) -> Vec<(DemandType, i32)> {
    DemandType::ALL
        .iter()
        .map(|&demand_type| {
            let feasible = match demand_type {
                DemandType::FireCoach => context.has_struggling_coach(),
                DemandType::DraftPlayer => context.current_week <= REGULAR_SEASON_WEEKS,
                _ => true,
            };

            let weight = if feasible {
                (demand_type.base_weight()
                    + trigger_bonus(trigger_type, demand_type)
                    + personality_adjustment(owner, demand_type))
                .max(0)
            } else {
                0
            };

            (demand_type, weight)
        })
        .collect()
}

/// Cumulative-weight draw against a single sample.
pub fn select_demand_type(weights: &[(DemandType, i32)], rng: &mut dyn RandomSource) -> Option<DemandType> {
    let total: i32 = weights.iter().map(|(_, w)| *w).sum();

    if total <= 0 {
        return None;
    }

    let roll = rng.next_float() * total as f64;
    let mut cumulative = 0.0;

    for (demand_type, weight) in weights {
        cumulative += *weight as f64;
        if *weight > 0 && roll < cumulative {
            return Some(*demand_type);
        }
    }

    weights.iter().rev().find(|(_, w)| *w > 0).map(|(t, _)| *t)
}

/// Demand deadline: a random window per type, stretched or shortened by
/// owner patience, never less than one week out.
pub fn calculate_deadline(
    demand_type: DemandType,
    current_week: u32,
    owner_patience: i32,
    rng: &mut dyn RandomSource,
) -> u32 {
    let (min, max) = demand_type.deadline_window();
    let patience_bonus = (owner_patience - 50).div_euclid(25);

    let weeks = (rng.range_int(min, max) + patience_bonus).max(1);

    current_week + weeks as u32
}

struct DemandDraft {
    description: String,
    target_id: Option<u32>,
}

impl DemandDraft {
    fn targeted(description: String, target_id: u32) -> Self {
        DemandDraft {
            description,
            target_id: Some(target_id),
        }
    }

    fn generic(description: &str) -> Self {
        DemandDraft {
            description: String::from(description),
            target_id: None,
        }
    }
}

/// Narrows a ranked pool to its top few and picks one at random.
fn pick_top<'a, T>(ranked: &[&'a T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if ranked.is_empty() {
        return None;
    }

    let shortlist = ranked.len().min(3);
    Some(ranked[rng.pick_index(shortlist)])
}

pub struct OwnerDemandGenerator;

impl OwnerDemandGenerator {
    /// `sequence` comes from the team's ledger so ids never repeat across GMs.
    pub fn generate(
        owner: &Owner,
        trigger: &InterventionTrigger,
        context: &DemandContext,
        sequence: u32,
        rng: &mut dyn RandomSource,
    ) -> Option<OwnerDemand> {
        let weights = calculate_demand_weights(owner, trigger.trigger_type, context);
        let demand_type = select_demand_type(&weights, rng)?;

        let draft = match demand_type {
            DemandType::SignPlayer => Self::sign_player(owner, context, rng),
            DemandType::FireCoach => Self::fire_coach(context),
            DemandType::DraftPlayer => Self::draft_player(owner, context, rng),
            DemandType::TradeFor => Self::trade_for(owner, context, rng),
            DemandType::Other => Self::other(trigger.trigger_type),
        };

        let demand = OwnerDemand {
            id: format!("demand-{}-{}-{}", context.team_id, context.current_week, sequence),
            demand_type,
            description: draft.description,
            target_id: draft.target_id,
            deadline: calculate_deadline(
                demand_type,
                context.current_week,
                owner.personality.traits.patience,
                rng,
            ),
            consequence: Self::consequence_text(trigger.severity),
            issued_week: context.current_week,
        };

        debug!(
            "owner: {}, demand {:?} issued: {}, due week {}",
            owner.name, demand.demand_type, demand.description, demand.deadline
        );

        Some(demand)
    }

    fn sign_player(owner: &Owner, context: &DemandContext, rng: &mut dyn RandomSource) -> DemandDraft {
        let personality = &owner.personality;

        let mut pool: Vec<&PlayerCandidate> = context.free_agents.iter().collect();

        if personality.has_trait(SecondaryTrait::PrObsessed) && pool.iter().any(|p| p.is_star) {
            pool.retain(|p| p.is_star);
        }

        if personality.traits.spending <= 30 {
            pool.sort_by(|a, b| a.asking_salary.total_cmp(&b.asking_salary));
        } else {
            pool.sort_by(|a, b| b.overall.cmp(&a.overall));
        }

        match pick_top(&pool, rng) {
            Some(player) => DemandDraft::targeted(
                format!("Sign free agent {} ({})", player.name, player.position),
                player.id,
            ),
            None => DemandDraft::generic("Sign an impact free agent"),
        }
    }

    fn fire_coach(context: &DemandContext) -> DemandDraft {
        let worst = context
            .coaches
            .iter()
            .filter(|c| c.is_struggling)
            .min_by_key(|c| c.performance_rating);

        match worst {
            Some(coach) => DemandDraft::targeted(format!("Fire {} ({})", coach.name, coach.role), coach.id),
            None => DemandDraft::generic("Shake up the coaching staff"),
        }
    }

    fn draft_player(owner: &Owner, context: &DemandContext, rng: &mut dyn RandomSource) -> DemandDraft {
        let personality = &owner.personality;

        let mut pool: Vec<&ProspectCandidate> = context.prospects.iter().collect();

        if personality.traits.ego >= 70 {
            pool.sort_by(|a, b| b.hype_level.cmp(&a.hype_level));
        } else if personality.has_trait(SecondaryTrait::AnalyticsBeliever) {
            // Value picks: good projection, little noise around them.
            pool.sort_by(|a, b| {
                a.projected_round
                    .cmp(&b.projected_round)
                    .then(a.hype_level.cmp(&b.hype_level))
            });
        } else {
            pool.sort_by(|a, b| a.projected_round.cmp(&b.projected_round));
        }

        match pick_top(&pool, rng) {
            Some(prospect) => DemandDraft::targeted(
                format!("Draft {} ({}) in the upcoming draft", prospect.name, prospect.position),
                prospect.id,
            ),
            None => DemandDraft::generic("Use the draft to add a future starter"),
        }
    }

    fn trade_for(owner: &Owner, context: &DemandContext, rng: &mut dyn RandomSource) -> DemandDraft {
        let personality = &owner.personality;

        let mut pool: Vec<&TradeTarget> = context.trade_targets.iter().collect();

        if personality.has_trait(SecondaryTrait::PrObsessed) && pool.iter().any(|t| t.is_star) {
            pool.retain(|t| t.is_star);
        } else if personality.traits.spending <= 30 && pool.iter().any(|t| !t.is_star) {
            pool.retain(|t| !t.is_star);
        }

        pool.sort_by(|a, b| b.overall.cmp(&a.overall));

        match pick_top(&pool, rng) {
            Some(target) => DemandDraft::targeted(
                format!("Trade for {} ({})", target.name, target.position),
                target.id,
            ),
            None => DemandDraft::generic("Make a trade that improves the roster now"),
        }
    }

    fn other(trigger_type: TriggerType) -> DemandDraft {
        let text = match trigger_type {
            TriggerType::LosingStreak => "Hold a closed-door meeting with the locker room",
            TriggerType::FanApproval => "Win back the fans with a community event",
            TriggerType::MediaScrutiny => "Hold a press conference and take responsibility",
            TriggerType::SeasonPerformance => "Present a plan to turn the season around",
            TriggerType::Ego => "Give the owner a bigger voice in football decisions",
        };

        DemandDraft::generic(text)
    }

    fn consequence_text(severity: Severity) -> String {
        let text = match severity {
            Severity::Severe => "Ignoring this could cost you your job",
            Severity::Moderate => "The owner's patience will wear thin if this is ignored",
            Severity::Mild => "The owner will remember if this is ignored",
        };

        String::from(text)
    }
}
