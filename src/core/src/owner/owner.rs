use crate::interference::OwnerDemand;
use crate::owner::{OwnerBuilder, OwnerPersonality, TraitKind};
use crate::patience::{
    JobSecurityLevel, PATIENCE_MAX, PATIENCE_MIN, apply_patience_change, describe_patience,
    describe_trust,
};
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

pub const TRUST_MIN: i32 = 0;
pub const TRUST_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetWorth {
    Modest,
    Wealthy,
    Billionaire,
    MultiBillionaire,
}

impl NetWorth {
    pub fn budget_multiplier(&self) -> f64 {
        match self {
            NetWorth::Modest => 0.9,
            NetWorth::Wealthy => 1.0,
            NetWorth::Billionaire => 1.1,
            NetWorth::MultiBillionaire => 1.25,
        }
    }

    pub fn random(rng: &mut dyn RandomSource) -> Self {
        match rng.next_float() {
            r if r < 0.2 => NetWorth::Modest,
            r if r < 0.55 => NetWorth::Wealthy,
            r if r < 0.9 => NetWorth::Billionaire,
            _ => NetWorth::MultiBillionaire,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: u32,
    pub name: String,
    pub team_id: u32,
    pub personality: OwnerPersonality,
    patience_meter: i32,
    trust_level: i32,
    pub active_demands: Vec<OwnerDemand>,
    pub years_as_owner: u32,
    #[serde(rename = "previousGMsFired")]
    pub previous_gms_fired: u32,
    pub championships_won: u32,
    pub net_worth: NetWorth,
    /// Traits the GM has learned about this owner.
    pub revealed_traits: Vec<TraitKind>,
}

impl Owner {
    pub fn new(
        id: u32,
        name: String,
        team_id: u32,
        personality: OwnerPersonality,
        patience_meter: i32,
        trust_level: i32,
        net_worth: NetWorth,
    ) -> Self {
        Owner {
            id,
            name,
            team_id,
            personality,
            patience_meter: patience_meter.clamp(PATIENCE_MIN, PATIENCE_MAX),
            trust_level: trust_level.clamp(TRUST_MIN, TRUST_MAX),
            active_demands: Vec::new(),
            years_as_owner: 0,
            previous_gms_fired: 0,
            championships_won: 0,
            net_worth,
            revealed_traits: Vec::new(),
        }
    }

    pub fn builder() -> OwnerBuilder {
        OwnerBuilder::new()
    }

    pub fn patience_meter(&self) -> i32 {
        self.patience_meter
    }

    pub fn trust_level(&self) -> i32 {
        self.trust_level
    }

    pub fn set_patience_meter(&mut self, value: i32) {
        self.patience_meter = value.clamp(PATIENCE_MIN, PATIENCE_MAX);
    }

    pub fn set_trust_level(&mut self, value: i32) {
        self.trust_level = value.clamp(TRUST_MIN, TRUST_MAX);
    }

    pub fn apply_patience_change(&mut self, delta: i32) -> i32 {
        self.patience_meter = apply_patience_change(self.patience_meter, delta);
        self.patience_meter
    }

    pub fn apply_trust_change(&mut self, delta: i32) -> i32 {
        self.trust_level = self.trust_level.saturating_add(delta).clamp(TRUST_MIN, TRUST_MAX);
        self.trust_level
    }

    pub fn job_security(&self) -> JobSecurityLevel {
        JobSecurityLevel::from_value(self.patience_meter)
    }

    pub fn wants_gm_fired(&self) -> bool {
        self.job_security() == JobSecurityLevel::Fired
    }

    pub fn has_active_demand(&self) -> bool {
        !self.active_demands.is_empty()
    }

    pub fn find_demand(&self, demand_id: &str) -> Option<&OwnerDemand> {
        self.active_demands.iter().find(|d| d.id == demand_id)
    }

    /// Drops a demand from the active list, returning it if it was there.
    pub fn remove_demand(&mut self, demand_id: &str) -> Option<OwnerDemand> {
        let index = self.active_demands.iter().position(|d| d.id == demand_id)?;
        Some(self.active_demands.remove(index))
    }

    /// Marks a trait as known to the GM. Returns false if it already was.
    pub fn reveal_trait(&mut self, kind: TraitKind) -> bool {
        if self.revealed_traits.contains(&kind) {
            return false;
        }

        self.revealed_traits.push(kind);
        true
    }

    /// Descriptive label for a trait, or `None` while it is still hidden.
    pub fn describe_revealed_trait(&self, kind: TraitKind) -> Option<&'static str> {
        if self.revealed_traits.contains(&kind) {
            Some(kind.describe(self.personality.traits.value(kind)))
        } else {
            None
        }
    }

    pub fn describe_patience(&self) -> &'static str {
        describe_patience(self.patience_meter)
    }

    pub fn describe_trust(&self) -> &'static str {
        describe_trust(self.trust_level)
    }

    /// Budget multiplier from wealth and spending appetite.
    pub fn budget_multiplier(&self) -> f64 {
        let spending = (self.personality.traits.spending - 50) as f64 / 250.0;
        self.net_worth.budget_multiplier() * (1.0 + spending)
    }

    /// Rolls the tenure counters forward by one season.
    pub fn complete_season(&mut self, won_championship: bool) {
        self.years_as_owner += 1;
        if won_championship {
            self.championships_won += 1;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.personality.is_valid()
            && (PATIENCE_MIN..=PATIENCE_MAX).contains(&self.patience_meter)
            && (TRUST_MIN..=TRUST_MAX).contains(&self.trust_level)
            && !self.name.is_empty()
            && self.active_demands.iter().all(|d| d.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OwnerTraits;

    fn owner() -> Owner {
        Owner::new(
            1,
            String::from("Margaret Holloway"),
            4,
            OwnerPersonality::new(OwnerTraits::default(), Vec::new()),
            60,
            50,
            NetWorth::Wealthy,
        )
    }

    #[test]
    fn test_scalars_clamp_on_every_write() {
        let mut owner = owner();

        assert_eq!(owner.apply_patience_change(200), 100);
        assert_eq!(owner.apply_patience_change(-500), 0);
        assert_eq!(owner.apply_trust_change(-20), 30);
        owner.set_trust_level(400);
        assert_eq!(owner.trust_level(), 100);
    }

    #[test]
    fn test_job_security_follows_meter() {
        let mut owner = owner();
        assert_eq!(owner.job_security(), JobSecurityLevel::Stable);

        owner.set_patience_meter(10);
        assert!(owner.wants_gm_fired());
    }

    #[test]
    fn test_reveal_trait_once() {
        let mut owner = owner();

        assert_eq!(owner.describe_revealed_trait(TraitKind::Ego), None);
        assert!(owner.reveal_trait(TraitKind::Ego));
        assert!(!owner.reveal_trait(TraitKind::Ego));
        assert_eq!(owner.describe_revealed_trait(TraitKind::Ego), Some("self-assured"));
    }

    #[test]
    fn test_budget_multiplier_scales_with_spending() {
        let mut lavish = owner();
        lavish.personality.traits.spending = 100;

        assert!(lavish.budget_multiplier() > owner().budget_multiplier());
        assert_eq!(owner().budget_multiplier(), 1.0);
    }

    #[test]
    fn test_owner_is_valid() {
        assert!(owner().is_valid());
    }
}
