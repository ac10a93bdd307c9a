use crate::error::{FrontOfficeError, FrontOfficeResult};
use crate::owner::{NetWorth, Owner, OwnerPersonality};

#[derive(Default)]
pub struct OwnerBuilder {
    id: Option<u32>,
    name: Option<String>,
    team_id: Option<u32>,
    personality: Option<OwnerPersonality>,
    patience_meter: Option<i32>,
    trust_level: Option<i32>,
    net_worth: Option<NetWorth>,
    years_as_owner: Option<u32>,
    previous_gms_fired: Option<u32>,
    championships_won: Option<u32>,
}

impl OwnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn personality(mut self, personality: OwnerPersonality) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn patience_meter(mut self, patience_meter: i32) -> Self {
        self.patience_meter = Some(patience_meter);
        self
    }

    pub fn trust_level(mut self, trust_level: i32) -> Self {
        self.trust_level = Some(trust_level);
        self
    }

    pub fn net_worth(mut self, net_worth: NetWorth) -> Self {
        self.net_worth = Some(net_worth);
        self
    }

    pub fn years_as_owner(mut self, years_as_owner: u32) -> Self {
        self.years_as_owner = Some(years_as_owner);
        self
    }

    pub fn previous_gms_fired(mut self, previous_gms_fired: u32) -> Self {
        self.previous_gms_fired = Some(previous_gms_fired);
        self
    }

    pub fn championships_won(mut self, championships_won: u32) -> Self {
        self.championships_won = Some(championships_won);
        self
    }

    pub fn build(self) -> FrontOfficeResult<Owner> {
        let mut owner = Owner::new(
            self.id.ok_or(FrontOfficeError::MissingField("id"))?,
            self.name.ok_or(FrontOfficeError::MissingField("name"))?,
            self.team_id.ok_or(FrontOfficeError::MissingField("team_id"))?,
            self.personality.ok_or(FrontOfficeError::MissingField("personality"))?,
            self.patience_meter.unwrap_or(65),
            self.trust_level.unwrap_or(50),
            self.net_worth.unwrap_or(NetWorth::Wealthy),
        );

        owner.years_as_owner = self.years_as_owner.unwrap_or(0);
        owner.previous_gms_fired = self.previous_gms_fired.unwrap_or(0);
        owner.championships_won = self.championships_won.unwrap_or(0);

        Ok(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OwnerTraits;

    #[test]
    fn test_build_requires_identity() {
        let result = OwnerBuilder::new().id(1).team_id(2).build();
        assert_eq!(result.unwrap_err(), FrontOfficeError::MissingField("name"));
    }

    #[test]
    fn test_build_defaults() {
        let owner = Owner::builder()
            .id(1)
            .name(String::from("Victor Crane"))
            .team_id(2)
            .personality(OwnerPersonality::new(OwnerTraits::default(), Vec::new()))
            .years_as_owner(12)
            .build()
            .unwrap();

        assert_eq!(owner.patience_meter(), 65);
        assert_eq!(owner.trust_level(), 50);
        assert_eq!(owner.years_as_owner, 12);
        assert_eq!(owner.net_worth, NetWorth::Wealthy);
    }
}
