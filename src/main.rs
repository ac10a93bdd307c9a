use core::career::{
    CareerRecord, InterviewApproach, InterviewSystem, JobMarketManager, JobOpening, VacancyReason,
};
use core::interference::{CoachCandidate, DemandContext, PlayerCandidate, ProspectCandidate, TradeTarget};
use core::ownership::{LeagueOwnershipState, OwnerNamePool};
use core::patience::{JobSecurityLevel, PlayoffResult};
use core::team::REGULAR_SEASON_WEEKS;
use core::utils::TimeEstimation;
use core::{FranchiseSimulator, RandomSource, SeasonReport, SimRng};
use database::{DatabaseLoader, LeagueGenerator};
use env_logger::Env;
use log::{info, warn};
use serde_json::json;
use std::env;

const START_SEASON: u32 = 2030;
const LEAGUE_AVERAGE_STRENGTH: i32 = 50;
const MAX_INTERVIEWS: usize = 3;

const APPROACHES: [InterviewApproach; 4] = [
    InterviewApproach::Aggressive,
    InterviewApproach::Balanced,
    InterviewApproach::Patient,
    InterviewApproach::Deferential,
];

struct RunConfig {
    seed: Option<u64>,
    seasons: u32,
    gm_team: u32,
    gm_name: String,
    snapshot: bool,
}

impl RunConfig {
    fn from_env() -> Self {
        RunConfig {
            seed: env::var("SEED").ok().and_then(|v| v.parse().ok()),
            seasons: env::var("SEASONS").ok().and_then(|v| v.parse().ok()).unwrap_or(5),
            gm_team: env::var("GM_TEAM").ok().and_then(|v| v.parse().ok()).unwrap_or(1),
            gm_name: env::var("GM_NAME").unwrap_or_else(|_| String::from("Jordan Reyes")),
            snapshot: env::var("MODE") == Ok(String::from("SNAPSHOT")),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RunConfig::from_env();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let mut rng = match config.seed {
        Some(seed) => SimRng::from_seed(seed),
        None => SimRng::from_entropy(),
    };

    let names = database.names.to_pool();
    let mut league = LeagueGenerator::generate(&database, START_SEASON, &mut rng)?;

    let mut simulator = Some(FranchiseSimulator::from_league(
        &league,
        config.gm_team,
        CareerRecord::new(config.gm_name.clone()),
        &mut rng,
    )?);
    let mut career = CareerRecord::new(config.gm_name.clone());

    for _ in 0..config.seasons {
        let Some(current) = simulator.as_mut() else {
            league.complete_season(None);
            league.process_ownership_changes(&names, &mut rng);

            simulator = find_new_job(&league, &career, 0, &mut rng)?;
            continue;
        };

        let report = play_season(current, &names, &mut rng);
        let champion = report.playoff_result.and_then(|result| match result {
            PlayoffResult::WonChampionship => Some(current.context.team_id),
            _ => None,
        });

        league.complete_season(champion);
        current.sync_to_league(&mut league)?;
        career = current.career.clone();

        let mut lost_job = report.fired;

        for event in league.process_ownership_changes(&names, &mut rng) {
            if event.team_id != current.context.team_id {
                continue;
            }

            if event.gm_retained {
                current.adopt_new_owner(&league)?;
            } else {
                info!("{} lost the job in the {} takeover", career.gm_name, current.context.name);
                lost_job = true;
            }
        }

        if lost_job {
            let previous_team = current.context.team_id;
            simulator = find_new_job(&league, &career, previous_team, &mut rng)?;
        }
    }

    if let Some(current) = &simulator {
        career = current.career.clone();
    }

    info!(
        "career: {} seasons, {}-{}, {} playoff trips, {} titles, fired {} times, reputation {}",
        career.total_seasons(),
        career.total_wins(),
        career.total_losses(),
        career.playoff_appearances(),
        career.championships(),
        career.times_fired(),
        career.reputation_tier().label()
    );

    if config.snapshot {
        let snapshot = json!({
            "league": league,
            "career": career,
        });

        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn play_season(simulator: &mut FranchiseSimulator, names: &OwnerNamePool, rng: &mut SimRng) -> SeasonReport {
    let context = market_context(simulator.context.team_id, names, rng);

    for _ in 0..REGULAR_SEASON_WEEKS {
        let opponent = LEAGUE_AVERAGE_STRENGTH + rng.range_int(-20, 20);
        let game = FranchiseSimulator::simulate_game(simulator.context.roster_strength, opponent, rng);

        let report = simulator.play_week(game, &context, rng);

        if let Some(statement) = &report.statement {
            info!("{}", statement.text);
        }

        if let Some(demand) = report.new_demand {
            info!("owner demand: {} ({})", demand.description, demand.consequence);

            // A GM on thin ice does what they are told.
            let comply = simulator.owner.job_security() <= JobSecurityLevel::WarmSeat || rng.chance(0.6);

            if let Err(error) = simulator.resolve_demand(&demand.id, comply) {
                warn!("could not resolve demand {}: {}", demand.id, error);
            }
        }
    }

    let playoff_result = playoff_run(simulator.team.wins, rng);
    let roster_delta = rng.range_int(-6, 6);

    simulator.finish_season(playoff_result, Vec::new(), roster_delta, rng)
}

fn playoff_run(wins: u32, rng: &mut SimRng) -> Option<PlayoffResult> {
    let qualifies = wins >= 11 || (wins >= 9 && rng.chance(0.5));
    if !qualifies {
        return None;
    }

    let round_win = (0.45 + (wins as f64 - 10.0) * 0.03).clamp(0.3, 0.75);

    let results = [
        PlayoffResult::LostWildCard,
        PlayoffResult::LostDivisional,
        PlayoffResult::LostConference,
        PlayoffResult::LostChampionship,
    ];

    for result in results {
        if !rng.chance(round_win) {
            return Some(result);
        }
    }

    Some(PlayoffResult::WonChampionship)
}

/// Every other franchise is an opening; interviews go to the keenest owners.
fn find_new_job(
    league: &LeagueOwnershipState,
    career: &CareerRecord,
    previous_team: u32,
    rng: &mut SimRng,
) -> color_eyre::Result<Option<FranchiseSimulator>> {
    let openings: Vec<(JobOpening, u32)> = league
        .teams
        .values()
        .filter(|team| team.context.team_id != previous_team)
        .filter(|_| rng.chance(0.15))
        .map(|team| {
            (
                JobOpening::new(&team.context, &team.owner, VacancyReason::GmFired),
                team.context.team_id,
            )
        })
        .collect();

    let mut pairs = Vec::with_capacity(openings.len());
    for (opening, team_id) in &openings {
        pairs.push((opening, league.owner(*team_id)?));
    }

    let offers = JobMarketManager::find_offers(career, pairs, rng);

    info!("{} openings, {} owners interested", openings.len(), offers.len());

    for offer in offers.into_iter().take(MAX_INTERVIEWS) {
        let owner = league.owner(offer.opening.team_id)?;
        let interview = InterviewSystem::generate_interview(owner, rng);

        let answers: Vec<InterviewApproach> = interview
            .questions
            .iter()
            .map(|_| APPROACHES[rng.pick_index(APPROACHES.len())])
            .collect();

        let outcome = InterviewSystem::conduct_interview(career, owner, &interview, &answers)?;

        if outcome.offer_extended {
            info!(
                "{} hired by {} ({} years)",
                career.gm_name,
                offer.opening.team_name,
                outcome.contract_years.unwrap_or(0)
            );

            return Ok(Some(FranchiseSimulator::from_league(
                league,
                offer.opening.team_id,
                career.clone(),
                rng,
            )?));
        }
    }

    info!("{} sits out the season", career.gm_name);

    Ok(None)
}

fn market_context(team_id: u32, names: &OwnerNamePool, rng: &mut SimRng) -> DemandContext {
    let positions = ["QB", "EDGE", "CB", "WR", "OT", "LB"];
    let mut context = DemandContext::new(team_id, 1);

    for id in 0..6 {
        let overall = rng.range_int(65, 92);

        context.free_agents.push(PlayerCandidate {
            id: 1000 + id,
            name: names.random_name(rng),
            position: String::from(positions[id as usize]),
            overall,
            asking_salary: rng.range_float(2.0, 30.0),
            is_star: overall >= 85,
        });

        context.trade_targets.push(TradeTarget {
            id: 2000 + id,
            name: names.random_name(rng),
            position: String::from(positions[id as usize]),
            overall: rng.range_int(70, 95),
            team_id: rng.range_int(1, 32) as u32,
            is_star: rng.chance(0.3),
        });

        context.prospects.push(ProspectCandidate {
            id: 3000 + id,
            name: names.random_name(rng),
            position: String::from(positions[id as usize]),
            hype_level: rng.range_int(30, 100),
            projected_round: rng.range_int(1, 7) as u32,
        });
    }

    for (id, role) in ["Head Coach", "Offensive Coordinator", "Defensive Coordinator"].iter().enumerate() {
        let performance_rating = rng.range_int(30, 90);

        context.coaches.push(CoachCandidate {
            id: 4000 + id as u32,
            name: names.random_name(rng),
            role: String::from(*role),
            performance_rating,
            is_struggling: performance_rating < 45,
        });
    }

    context
}
