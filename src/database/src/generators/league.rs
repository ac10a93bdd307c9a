use crate::DatabaseEntity;
use core::owner::{NetWorth, Owner, PersonalityEngine};
use core::ownership::LeagueOwnershipState;
use core::team::TeamContext;
use core::utils::RandomSource;
use core::FrontOfficeResult;
use log::debug;

pub struct LeagueGenerator;

impl LeagueGenerator {
    /// Builds the opening league: one owner per franchise, each with a
    /// rolled personality and some years of history behind them.
    pub fn generate(
        data: &DatabaseEntity,
        season: u32,
        rng: &mut dyn RandomSource,
    ) -> FrontOfficeResult<LeagueOwnershipState> {
        let names = data.names.to_pool();
        let mut league = LeagueOwnershipState::new(season);

        for franchise in &data.franchises {
            let context = TeamContext::new(
                franchise.id,
                franchise.full_name(),
                franchise.market_size,
                franchise.roster_strength,
            );

            let years_as_owner = rng.range_int(1, 30) as u32;

            let owner = Owner::builder()
                .id(league.next_owner_id())
                .name(names.random_name(rng))
                .team_id(franchise.id)
                .personality(PersonalityEngine::generate(rng))
                .patience_meter(rng.range_int(50, 80))
                .trust_level(rng.range_int(40, 65))
                .net_worth(NetWorth::random(rng))
                .years_as_owner(years_as_owner)
                .previous_gms_fired(rng.range_int(0, (years_as_owner / 4) as i32) as u32)
                .build()?;

            debug!(
                "team: {}, owner: {}, archetype: {:?}",
                context.name,
                owner.name,
                owner.personality.archetype()
            );

            league.add_team(owner, context);
        }

        Ok(league)
    }
}
