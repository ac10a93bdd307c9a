pub mod simulator;
pub use simulator::*;

pub mod career;
pub mod error;
pub mod expectations;
pub mod interference;
pub mod mood;
pub mod owner;
pub mod ownership;
pub mod patience;
pub mod team;

pub mod utils;

pub use error::{FrontOfficeError, FrontOfficeResult};
pub use owner::{Owner, OwnerPersonality, OwnerTraits, PersonalityEngine};
pub use ownership::{LeagueOwnershipState, OwnerNamePool};
pub use team::{MarketSize, TeamContext, TeamPhase, TeamState};
pub use utils::*;
