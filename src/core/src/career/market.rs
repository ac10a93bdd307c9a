use crate::career::CareerRecord;
use crate::owner::{Owner, SecondaryTrait};
use crate::team::{MarketSize, TeamContext, TeamPhase};
use crate::utils::RandomSource;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const OFFER_INTEREST_THRESHOLD: f64 = 45.0;
pub const INTEREST_NOISE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VacancyReason {
    GmFired,
    OwnershipChange,
    Retirement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub team_id: u32,
    pub team_name: String,
    pub market_size: MarketSize,
    pub phase: TeamPhase,
    pub owner_id: u32,
    pub reason: VacancyReason,
}

impl JobOpening {
    pub fn new(context: &TeamContext, owner: &Owner, reason: VacancyReason) -> Self {
        JobOpening {
            team_id: context.team_id,
            team_name: context.name.clone(),
            market_size: context.market_size,
            phase: context.phase,
            owner_id: owner.id,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    pub opening: JobOpening,
    pub interest: f64,
}

fn owner_fit(record: &CareerRecord, owner: &Owner) -> f64 {
    let personality = &owner.personality;
    let mut fit = 0.0;

    if personality.has_trait(SecondaryTrait::WinNow) || personality.has_trait(SecondaryTrait::ChampionshipOrBust) {
        if record.championships() > 0 {
            fit += 10.0;
        }
        if record.playoff_appearances() == 0 {
            fit -= 10.0;
        }
    }

    if personality.has_trait(SecondaryTrait::LongTermThinker) && record.total_seasons() >= 3 {
        fit += 5.0;
    }

    if personality.traits.control >= 70 && record.times_fired() >= 2 {
        fit -= 5.0;
    }

    fit
}

/// How keen an owner is on this GM, 0-100.
pub fn calculate_team_interest(record: &CareerRecord, owner: &Owner) -> f64 {
    let playoff_credit = (record.playoff_appearances() as f64 * 20.0).min(100.0);

    let interest = 0.4 * record.reputation() as f64
        + 0.2 * record.win_percentage() * 100.0
        + 0.15 * playoff_credit
        + owner_fit(record, owner)
        - 5.0 * record.times_fired() as f64;

    interest.clamp(0.0, 100.0)
}

pub struct JobMarketManager;

impl JobMarketManager {
    /// Offers from every opening keen enough on the GM, best first.
    pub fn find_offers<'a, I>(record: &CareerRecord, openings: I, rng: &mut dyn RandomSource) -> Vec<JobOffer>
    where
        I: IntoIterator<Item = (&'a JobOpening, &'a Owner)>,
    {
        openings
            .into_iter()
            .map(|(opening, owner)| {
                let noise = rng.range_float(-INTEREST_NOISE, INTEREST_NOISE);
                let interest = (calculate_team_interest(record, owner) + noise).clamp(0.0, 100.0);

                JobOffer {
                    opening: opening.clone(),
                    interest,
                }
            })
            .filter(|offer| offer.interest >= OFFER_INTEREST_THRESHOLD)
            .sorted_by(|a, b| b.interest.total_cmp(&a.interest))
            .collect()
    }
}
