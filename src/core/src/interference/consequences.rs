use crate::interference::{DemandType, InterventionTrigger, Severity};
use crate::owner::Owner;
use crate::patience::{JobSecurityLevel, apply_patience_change};
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

pub const COMPLIANCE_BASE_PATIENCE: f64 = 5.0;
pub const COMPLIANCE_BASE_TRUST: f64 = 3.0;
pub const DEFIANCE_BASE_PATIENCE: f64 = -15.0;
pub const DEFIANCE_BASE_TRUST: f64 = -10.0;

/// Owners at or above this control level pile on demands.
pub const STACKING_CONTROL_LEVEL: i32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceConsequence {
    pub patience_change: i32,
    pub trust_change: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefianceConsequence {
    pub patience_change: i32,
    pub trust_change: i32,
    pub new_patience: i32,
    pub fired_immediately: bool,
    pub description: String,
}

/// Controlling owners expect to be obeyed, so compliance earns less
/// patience but a little more trust.
pub fn calculate_compliance_consequence(owner: &Owner) -> ComplianceConsequence {
    let control_excess = ((owner.personality.traits.control - 50).max(0) as f64) / 50.0;

    let patience_reduction = control_excess * 0.5;
    let trust_boost = control_excess * 0.3;

    let patience_change = (COMPLIANCE_BASE_PATIENCE * (1.0 - patience_reduction)).round() as i32;
    let trust_change = (COMPLIANCE_BASE_TRUST * (1.0 + trust_boost)).round() as i32;

    ComplianceConsequence {
        patience_change,
        trust_change,
        description: String::from("The owner appreciates that you followed through"),
    }
}

fn demand_type_weight(demand_type: DemandType) -> f64 {
    match demand_type {
        DemandType::FireCoach => 1.2,
        DemandType::TradeFor => 1.1,
        DemandType::SignPlayer => 1.0,
        DemandType::DraftPlayer => 0.9,
        DemandType::Other => 0.8,
    }
}

/// Cost of ignoring a demand. Does not touch the owner: the caller applies
/// the returned deltas. `fired_immediately` is a projection of where the
/// meter would land.
pub fn calculate_defiance_consequence(
    owner: &Owner,
    demand_type: DemandType,
    consecutive_defiances: u32,
    current_patience: i32,
) -> DefianceConsequence {
    let traits = &owner.personality.traits;

    let control_multiplier = 1.0 + (traits.control - 50) as f64 / 100.0;
    let stacking_multiplier = 1.0 + consecutive_defiances as f64 * 0.25;
    let loyalty_softening = 1.0 - (traits.loyalty as f64 / 100.0) * 0.25;

    let multiplier = control_multiplier * stacking_multiplier * loyalty_softening * demand_type_weight(demand_type);

    let patience_change = (DEFIANCE_BASE_PATIENCE * multiplier).round() as i32;
    let trust_change = (DEFIANCE_BASE_TRUST * multiplier).round() as i32;

    let new_patience = apply_patience_change(current_patience, patience_change);
    let fired_immediately = JobSecurityLevel::from_value(new_patience) == JobSecurityLevel::Fired;

    let description = if fired_immediately {
        String::from("The owner has run out of patience with your defiance")
    } else if consecutive_defiances >= 2 {
        String::from("The owner is furious that you keep ignoring direction")
    } else {
        String::from("The owner is unhappy that you ignored the request")
    };

    DefianceConsequence {
        patience_change,
        trust_change,
        new_patience,
        fired_immediately,
        description,
    }
}

/// Decides whether a detected trigger turns into a concrete demand.
pub fn should_generate_demand(owner: &Owner, trigger: &InterventionTrigger, rng: &mut dyn RandomSource) -> bool {
    let control = owner.personality.traits.control;

    if owner.has_active_demand() && control < STACKING_CONTROL_LEVEL {
        return false;
    }

    match trigger.severity {
        Severity::Severe => true,
        Severity::Moderate => rng.chance(0.7),
        Severity::Mild => rng.chance(control as f64 / 100.0 * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interference::{OwnerDemand, TriggerType};
    use crate::owner::{NetWorth, OwnerPersonality, OwnerTraits};
    use crate::utils::ScriptedRandom;

    fn owner(control: i32, loyalty: i32, patience_meter: i32) -> Owner {
        Owner::new(
            1,
            String::from("Ruth Calloway"),
            1,
            OwnerPersonality::new(OwnerTraits::new(50, 50, control, loyalty, 50), Vec::new()),
            patience_meter,
            50,
            NetWorth::Wealthy,
        )
    }

    fn trigger(severity: Severity) -> InterventionTrigger {
        InterventionTrigger {
            trigger_type: TriggerType::FanApproval,
            severity,
            description: String::new(),
        }
    }

    #[test]
    fn test_compliance_for_neutral_owner() {
        let consequence = calculate_compliance_consequence(&owner(50, 50, 60));
        assert_eq!(consequence.patience_change, 5);
        assert_eq!(consequence.trust_change, 3);
    }

    #[test]
    fn test_controlling_owner_expects_compliance() {
        let consequence = calculate_compliance_consequence(&owner(100, 50, 60));
        // 5 * 0.5 and 3 * 1.3
        assert_eq!(consequence.patience_change, 3);
        assert_eq!(consequence.trust_change, 4);
    }

    #[test]
    fn test_defiance_stacks() {
        let owner = owner(50, 50, 80);

        let first = calculate_defiance_consequence(&owner, DemandType::SignPlayer, 0, 80);
        let third = calculate_defiance_consequence(&owner, DemandType::SignPlayer, 2, 80);

        assert!(third.patience_change < first.patience_change);
        assert!(third.trust_change < first.trust_change);
    }

    #[test]
    fn test_loyal_owner_softens_defiance() {
        let loyal = calculate_defiance_consequence(&owner(50, 100, 80), DemandType::SignPlayer, 0, 80);
        let ruthless = calculate_defiance_consequence(&owner(50, 1, 80), DemandType::SignPlayer, 0, 80);

        assert!(loyal.patience_change > ruthless.patience_change);
    }

    #[test]
    fn test_defiance_can_fire_immediately() {
        let owner = owner(80, 50, 15);
        let consequence = calculate_defiance_consequence(&owner, DemandType::SignPlayer, 2, 15);

        assert!(consequence.fired_immediately);
        assert_eq!(consequence.new_patience, 0);
        // Projection only: the owner is untouched.
        assert_eq!(owner.patience_meter(), 15);
    }

    #[test]
    fn test_defiance_with_room_to_spare() {
        let consequence = calculate_defiance_consequence(&owner(50, 50, 90), DemandType::Other, 0, 90);
        assert!(!consequence.fired_immediately);
    }

    #[test]
    fn test_severe_trigger_always_generates() {
        let mut rng = ScriptedRandom::constant(0.99);
        assert!(should_generate_demand(&owner(10, 50, 60), &trigger(Severity::Severe), &mut rng));
    }

    #[test]
    fn test_moderate_and_mild_roll() {
        let owner = owner(60, 50, 60);

        assert!(should_generate_demand(&owner, &trigger(Severity::Moderate), &mut ScriptedRandom::constant(0.69)));
        assert!(!should_generate_demand(&owner, &trigger(Severity::Moderate), &mut ScriptedRandom::constant(0.7)));

        // control 60 -> 0.3
        assert!(should_generate_demand(&owner, &trigger(Severity::Mild), &mut ScriptedRandom::constant(0.29)));
        assert!(!should_generate_demand(&owner, &trigger(Severity::Mild), &mut ScriptedRandom::constant(0.31)));
    }

    #[test]
    fn test_active_demand_suppresses_unless_controlling() {
        let active = OwnerDemand {
            id: String::from("x"),
            demand_type: DemandType::Other,
            description: String::from("Improve the team's image"),
            target_id: None,
            deadline: 6,
            consequence: String::new(),
            issued_week: 3,
        };

        let mut relaxed = owner(60, 50, 60);
        relaxed.active_demands.push(active.clone());
        let mut controlling = owner(85, 50, 60);
        controlling.active_demands.push(active);

        let mut rng = ScriptedRandom::constant(0.0);
        assert!(!should_generate_demand(&relaxed, &trigger(Severity::Severe), &mut rng));
        assert!(should_generate_demand(&controlling, &trigger(Severity::Severe), &mut rng));
    }
}
