use crate::owner::{NetWorth, Owner, OwnerPersonality, PersonalityEngine};
use crate::team::{MarketSize, PerformanceTier, TeamContext};
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

pub const BASE_CHANGE_PROBABILITY: f64 = 0.008;
pub const MAX_CHANGE_PROBABILITY: f64 = 0.05;

pub const MIN_GM_RETENTION: f64 = 0.1;
pub const MAX_GM_RETENTION: f64 = 0.95;

/// Starting patience and trust for a relationship with no history.
pub const FRESH_PATIENCE_RANGE: (i32, i32) = (55, 75);
pub const FRESH_TRUST_RANGE: (i32, i32) = (45, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnershipChangeType {
    Sale,
    Death,
    FamilyTransfer,
    ForcedSale,
    GroupPurchase,
}

impl OwnershipChangeType {
    pub const ALL: [OwnershipChangeType; 5] = [
        OwnershipChangeType::Sale,
        OwnershipChangeType::Death,
        OwnershipChangeType::FamilyTransfer,
        OwnershipChangeType::ForcedSale,
        OwnershipChangeType::GroupPurchase,
    ];

    fn base_weight(&self) -> u32 {
        match self {
            OwnershipChangeType::Sale => 40,
            OwnershipChangeType::Death => 10,
            OwnershipChangeType::FamilyTransfer => 15,
            OwnershipChangeType::ForcedSale => 10,
            OwnershipChangeType::GroupPurchase => 25,
        }
    }

    pub fn base_retention(&self) -> f64 {
        match self {
            OwnershipChangeType::FamilyTransfer => 0.8,
            OwnershipChangeType::Death => 0.7,
            OwnershipChangeType::GroupPurchase => 0.55,
            OwnershipChangeType::Sale => 0.5,
            OwnershipChangeType::ForcedSale => 0.3,
        }
    }

    pub fn headline(&self, previous_owner: &str, new_owner: &str) -> String {
        match self {
            OwnershipChangeType::Sale => format!("{} sells the franchise to {}", previous_owner, new_owner),
            OwnershipChangeType::Death => {
                format!("{} has died; {} takes control of the franchise", previous_owner, new_owner)
            }
            OwnershipChangeType::FamilyTransfer => {
                format!("{} hands the franchise to family member {}", previous_owner, new_owner)
            }
            OwnershipChangeType::ForcedSale => {
                format!("The league forces {} to sell; {} is the new owner", previous_owner, new_owner)
            }
            OwnershipChangeType::GroupPurchase => {
                format!("An investment group led by {} buys out {}", new_owner, previous_owner)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipChangeEvent {
    pub season: u32,
    pub team_id: u32,
    pub change_type: OwnershipChangeType,
    pub previous_owner_id: u32,
    pub previous_owner_name: String,
    pub new_owner_id: u32,
    pub new_owner_name: String,
    pub gm_retained: bool,
    pub description: String,
}

/// Per-season chance the franchise changes hands.
pub fn calculate_ownership_change_probability(owner: &Owner, years_since_change: u32, context: &TeamContext) -> f64 {
    let mut probability = BASE_CHANGE_PROBABILITY;

    if years_since_change > 10 {
        probability += 0.002 * (years_since_change - 10) as f64;
    }

    if owner.years_as_owner > 20 {
        probability += 0.005;
    }
    if owner.years_as_owner > 30 {
        probability += 0.005;
    }

    match context.recent_performance {
        PerformanceTier::Terrible => probability += 0.003,
        PerformanceTier::Poor if context.market_size == MarketSize::Small => probability += 0.002,
        _ => {}
    }

    probability.min(MAX_CHANGE_PROBABILITY)
}

pub fn change_type_weights(owner: &Owner) -> Vec<(OwnershipChangeType, u32)> {
    let tenure = owner.years_as_owner;

    OwnershipChangeType::ALL
        .iter()
        .map(|&change_type| {
            let mut weight = change_type.base_weight();

            if tenure > 20 {
                weight += match change_type {
                    OwnershipChangeType::Death => 15,
                    OwnershipChangeType::FamilyTransfer => 10,
                    _ => 0,
                };
            }
            if tenure > 30 && change_type == OwnershipChangeType::Death {
                weight += 15;
            }

            (change_type, weight)
        })
        .collect()
}

pub fn determine_change_type(owner: &Owner, rng: &mut dyn RandomSource) -> OwnershipChangeType {
    let weights = change_type_weights(owner);
    let total: u32 = weights.iter().map(|(_, w)| w).sum();

    let roll = rng.next_float() * total as f64;
    let mut cumulative = 0.0;

    for (change_type, weight) in &weights {
        cumulative += *weight as f64;
        if roll < cumulative {
            return *change_type;
        }
    }

    OwnershipChangeType::Sale
}

pub fn calculate_gm_retention_probability(
    change_type: OwnershipChangeType,
    gm_performance: PerformanceTier,
    new_owner: &OwnerPersonality,
) -> f64 {
    let mut probability = change_type.base_retention();

    probability += match gm_performance {
        PerformanceTier::Excellent => 0.3,
        PerformanceTier::Good => 0.15,
        PerformanceTier::Average => 0.0,
        PerformanceTier::Poor => -0.2,
        PerformanceTier::Terrible => -0.4,
    };

    let traits = &new_owner.traits;

    // New owners who want their own people.
    if traits.control >= 70 {
        probability -= 0.1;
    }

    if traits.patience >= 70 {
        probability += 0.1;
    } else if traits.patience <= 30 {
        probability -= 0.1;
    }

    probability.clamp(MIN_GM_RETENTION, MAX_GM_RETENTION)
}

pub fn determine_gm_retention(
    change_type: OwnershipChangeType,
    gm_performance: PerformanceTier,
    new_owner: &OwnerPersonality,
    rng: &mut dyn RandomSource,
) -> bool {
    rng.chance(calculate_gm_retention_probability(change_type, gm_performance, new_owner))
}

/// A brand-new owner with no history at the club.
pub fn generate_new_owner(id: u32, name: String, team_id: u32, rng: &mut dyn RandomSource) -> Owner {
    let personality = PersonalityEngine::generate(rng);
    let patience = rng.range_int(FRESH_PATIENCE_RANGE.0, FRESH_PATIENCE_RANGE.1);
    let trust = rng.range_int(FRESH_TRUST_RANGE.0, FRESH_TRUST_RANGE.1);
    let net_worth = NetWorth::random(rng);

    Owner::new(id, name, team_id, personality, patience, trust, net_worth)
}
