pub mod compliance;
pub mod consequences;
pub mod demands;
pub mod triggers;

pub use compliance::*;
pub use consequences::*;
pub use demands::*;
pub use triggers::*;

use crate::error::{FrontOfficeError, FrontOfficeResult};
use crate::owner::Owner;
use crate::team::TeamState;
use crate::utils::RandomSource;
use log::{info, warn};

/// Outcome of one weekly interference pass.
#[derive(Debug, Clone, PartialEq)]
pub struct InterferenceResult {
    pub triggers: Vec<InterventionTrigger>,
    pub demand: Option<OwnerDemand>,
}

impl InterferenceResult {
    pub fn quiet() -> Self {
        InterferenceResult {
            triggers: Vec::new(),
            demand: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpiredDemand {
    pub demand: OwnerDemand,
    pub consequence: DefianceConsequence,
}

pub struct InterferenceSystem;

impl InterferenceSystem {
    /// Samples the team against the owner's thresholds and, when the most
    /// severe trigger warrants it, issues a demand. The demand is registered
    /// in the ledger and attached to the owner; one the ledger rejects is
    /// dropped.
    pub fn evaluate_week(
        owner: &mut Owner,
        team: &TeamState,
        state: &mut InterferenceState,
        context: &DemandContext,
        rng: &mut dyn RandomSource,
    ) -> InterferenceResult {
        let triggers = detect_all_triggers(owner, team, state, rng);

        let Some(trigger) = get_most_severe_trigger(&triggers) else {
            return InterferenceResult::quiet();
        };

        if !should_generate_demand(owner, trigger, rng) {
            return InterferenceResult { triggers, demand: None };
        }

        let sequence = state.next_demand_sequence();
        let demand = OwnerDemandGenerator::generate(owner, trigger, context, sequence, rng).and_then(|demand| {
            if let Err(error) = state.register_demand(&demand) {
                warn!("owner: {}, team: {}, demand dropped: {}", owner.name, team.team_id, error);
                return None;
            }

            info!(
                "owner: {}, team: {}, {:?} trigger -> demand: {}",
                owner.name, team.team_id, trigger.trigger_type, demand.description
            );

            owner.active_demands.push(demand.clone());
            Some(demand)
        });

        InterferenceResult { triggers, demand }
    }

    /// Applies a compliance consequence for an open demand and closes it.
    pub fn comply(
        owner: &mut Owner,
        state: &mut InterferenceState,
        demand_id: &str,
        week: u32,
    ) -> FrontOfficeResult<ComplianceConsequence> {
        let demand = Self::take_pending(owner, state, demand_id)?;
        let consequence = calculate_compliance_consequence(owner);

        state.record_compliance(&demand, week);
        owner.apply_patience_change(consequence.patience_change);
        owner.apply_trust_change(consequence.trust_change);
        state.mark_consequence_applied(&demand.id);

        Ok(consequence)
    }

    /// Applies a defiance consequence for an open demand and closes it.
    pub fn defy(
        owner: &mut Owner,
        state: &mut InterferenceState,
        demand_id: &str,
        week: u32,
    ) -> FrontOfficeResult<DefianceConsequence> {
        let demand = Self::take_pending(owner, state, demand_id)?;
        let consequence = calculate_defiance_consequence(
            owner,
            demand.demand_type,
            state.consecutive_defiances,
            owner.patience_meter(),
        );

        state.record_defiance(&demand, week);
        owner.apply_patience_change(consequence.patience_change);
        owner.apply_trust_change(consequence.trust_change);
        state.mark_consequence_applied(&demand.id);

        Ok(consequence)
    }

    /// Turns overdue demands into defiances and applies their cost.
    pub fn sweep_expired(owner: &mut Owner, state: &mut InterferenceState, week: u32) -> Vec<ExpiredDemand> {
        let consecutive_before = state.consecutive_defiances;
        let expired = state.check_expired_demands(&owner.active_demands, week);

        expired
            .into_iter()
            .enumerate()
            .map(|(idx, demand)| {
                owner.remove_demand(&demand.id);

                let consequence = calculate_defiance_consequence(
                    owner,
                    demand.demand_type,
                    consecutive_before + idx as u32,
                    owner.patience_meter(),
                );

                owner.apply_patience_change(consequence.patience_change);
                owner.apply_trust_change(consequence.trust_change);
                state.mark_consequence_applied(&demand.id);

                info!(
                    "owner: {}, demand expired: {}, patience {}",
                    owner.name, demand.description, consequence.patience_change
                );

                ExpiredDemand { demand, consequence }
            })
            .collect()
    }

    fn take_pending(owner: &mut Owner, state: &InterferenceState, demand_id: &str) -> FrontOfficeResult<OwnerDemand> {
        if let Some(record) = state.find_record(demand_id) {
            if !record.is_pending() {
                return Err(FrontOfficeError::DemandAlreadyResolved(demand_id.to_string()));
            }
        }

        owner
            .remove_demand(demand_id)
            .ok_or_else(|| FrontOfficeError::DemandNotFound(demand_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::{NetWorth, OwnerPersonality, OwnerTraits};
    use crate::team::ExpectationTier;
    use crate::utils::ScriptedRandom;

    fn owner() -> Owner {
        Owner::new(
            1,
            String::from("Eleanor Marsh"),
            2,
            OwnerPersonality::new(OwnerTraits::default(), Vec::new()),
            60,
            50,
            NetWorth::Wealthy,
        )
    }

    fn losing_team() -> TeamState {
        let mut team = TeamState::new(2, ExpectationTier::Competitive);
        team.current_week = 9;
        team.wins = 1;
        team.losses = 7;
        team.current_losing_streak = 7;
        team
    }

    #[test]
    fn test_quiet_week() {
        let mut owner = owner();
        let team = TeamState::new(2, ExpectationTier::Competitive);
        let mut state = InterferenceState::new(2);
        let mut rng = ScriptedRandom::constant(0.5);

        let result = InterferenceSystem::evaluate_week(
            &mut owner,
            &team,
            &mut state,
            &DemandContext::new(2, 1),
            &mut rng,
        );

        assert_eq!(result, InterferenceResult::quiet());
        assert!(!owner.has_active_demand());
    }

    #[test]
    fn test_severe_week_issues_demand() {
        let mut owner = owner();
        let team = losing_team();
        let mut state = InterferenceState::new(2);
        let mut rng = ScriptedRandom::constant(0.5);

        let result = InterferenceSystem::evaluate_week(
            &mut owner,
            &team,
            &mut state,
            &DemandContext::new(2, 9),
            &mut rng,
        );

        let demand = result.demand.unwrap();
        assert_eq!(owner.active_demands.len(), 1);
        assert!(state.find_record(&demand.id).unwrap().is_pending());
        assert_eq!(state.last_intervention_week, Some(9));
    }

    #[test]
    fn test_comply_and_defy() {
        let mut owner = owner();
        let team = losing_team();
        let mut state = InterferenceState::new(2);
        let mut rng = ScriptedRandom::constant(0.5);

        let demand = InterferenceSystem::evaluate_week(
            &mut owner,
            &team,
            &mut state,
            &DemandContext::new(2, 9),
            &mut rng,
        )
        .demand
        .unwrap();

        let consequence = InterferenceSystem::comply(&mut owner, &mut state, &demand.id, 10).unwrap();
        assert_eq!(consequence.patience_change, 5);
        assert_eq!(owner.patience_meter(), 65);
        assert!(!owner.has_active_demand());
        assert!(state.find_record(&demand.id).unwrap().consequence_applied);

        assert_eq!(
            InterferenceSystem::defy(&mut owner, &mut state, &demand.id, 10),
            Err(FrontOfficeError::DemandAlreadyResolved(demand.id.clone()))
        );
        assert_eq!(
            InterferenceSystem::defy(&mut owner, &mut state, "missing", 10),
            Err(FrontOfficeError::DemandNotFound(String::from("missing")))
        );
    }

    #[test]
    fn test_demand_id_already_on_ledger_is_not_attached() {
        let mut owner = owner();
        let team = losing_team();
        let mut state = InterferenceState::new(2);
        let mut rng = ScriptedRandom::constant(0.5);

        let first = InterferenceSystem::evaluate_week(&mut owner, &team, &mut state, &DemandContext::new(2, 9), &mut rng)
            .demand
            .unwrap();
        InterferenceSystem::comply(&mut owner, &mut state, &first.id, 10).unwrap();

        // A ledger restored without its sequence hands out the same id again.
        state.demand_sequence = 0;
        let repeat =
            InterferenceSystem::evaluate_week(&mut owner, &team, &mut state, &DemandContext::new(2, 9), &mut rng);

        assert_eq!(repeat.demand, None);
        assert!(!owner.has_active_demand());
        assert_eq!(state.compliance_history.len(), 1);

        let fresh = InterferenceSystem::evaluate_week(&mut owner, &team, &mut state, &DemandContext::new(2, 9), &mut rng)
            .demand
            .unwrap();
        assert_ne!(fresh.id, first.id);
        assert!(state.find_record(&fresh.id).unwrap().is_pending());
    }

    #[test]
    fn test_sweep_expired() {
        let mut owner = owner();
        let mut state = InterferenceState::new(2);
        let demand = OwnerDemand {
            id: String::from("late"),
            demand_type: DemandType::Other,
            description: String::from("Hold a press conference and take responsibility"),
            target_id: None,
            deadline: 4,
            consequence: String::new(),
            issued_week: 2,
        };
        state.register_demand(&demand).unwrap();
        owner.active_demands.push(demand);

        assert!(InterferenceSystem::sweep_expired(&mut owner, &mut state, 4).is_empty());

        let expired = InterferenceSystem::sweep_expired(&mut owner, &mut state, 5);
        assert_eq!(expired.len(), 1);
        // -15 * 0.875 * 0.8
        assert_eq!(expired[0].consequence.patience_change, -11);
        assert_eq!(owner.patience_meter(), 49);
        assert!(!owner.has_active_demand());
        assert_eq!(state.consecutive_defiances, 1);
    }
}
