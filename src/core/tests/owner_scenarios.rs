use core::expectations::{FlexibilityLevel, SeasonExpectation, SeasonResult, evaluate_season_expectations};
use core::interference::{
    DemandType, InterferenceState, OwnerDemand, Severity, TriggerType, calculate_defiance_consequence,
    detect_losing_streak_intervention,
};
use core::mood::{MOOD_NEUTRAL, MoodEvent, MoodEventType, OwnerMoodState};
use core::owner::{NetWorth, Owner, OwnerPersonality, OwnerTraits};
use core::ownership::{MAX_CHANGE_PROBABILITY, calculate_ownership_change_probability};
use core::patience::{
    JobSecurityLevel, PatienceEventType, SeasonSummary, apply_patience_change, generate_season_events,
};
use core::team::{ExpectationTier, MarketSize, TeamContext, TeamPhase, TeamState};

fn owner(traits: OwnerTraits, patience_meter: i32) -> Owner {
    Owner::new(
        11,
        String::from("Margaret Hollis"),
        4,
        OwnerPersonality::new(traits, Vec::new()),
        patience_meter,
        50,
        NetWorth::Billionaire,
    )
}

fn demand(id: &str) -> OwnerDemand {
    OwnerDemand {
        id: String::from(id),
        demand_type: DemandType::SignPlayer,
        description: String::from("Sign a veteran pass rusher"),
        target_id: None,
        deadline: 6,
        consequence: String::from("The owner will remember this"),
        issued_week: 3,
    }
}

#[test]
fn long_losing_streak_is_a_severe_trigger() {
    let mut owner = owner(OwnerTraits::default(), 60);
    owner.personality.intervention_triggers.losing_streak_length = 4;

    let mut team = TeamState::new(4, ExpectationTier::Competitive);
    team.current_losing_streak = 8;

    let trigger = detect_losing_streak_intervention(&owner, &team).unwrap();

    assert_eq!(trigger.trigger_type, TriggerType::LosingStreak);
    assert_eq!(trigger.severity, Severity::Severe);
}

#[test]
fn controlling_owner_fires_a_repeat_defier() {
    let owner = owner(OwnerTraits::new(50, 50, 80, 50, 50), 15);

    let consequence = calculate_defiance_consequence(&owner, DemandType::SignPlayer, 2, 15);

    assert!(consequence.fired_immediately);
}

#[test]
fn satisfaction_streak_resets_on_direction_change() {
    let personality = OwnerPersonality::new(OwnerTraits::default(), Vec::new());
    let mut mood = OwnerMoodState::new(4);

    let win = MoodEvent::new(MoodEventType::Win, 1, &personality);
    assert!(win.impact.mood > 0);
    mood.process_mood_event(win);
    assert_eq!(mood.satisfaction_streak(), 1);

    mood.process_mood_event(MoodEvent::new(MoodEventType::Loss, 2, &personality));
    assert_eq!(mood.satisfaction_streak(), -1);
}

#[test]
fn four_wins_short_of_expectation_is_missed() {
    let summary = SeasonSummary {
        wins: 9,
        losses: 8,
        expected_wins: 13,
        playoff_result: None,
    };

    let events = generate_season_events(&summary);

    assert!(events.iter().any(|e| e.event == PatienceEventType::MissedExpectations));
}

#[test]
fn patience_changes_stay_in_range() {
    for current in (0..=100).step_by(5) {
        for delta in (-1000..=1000).step_by(37) {
            let value = apply_patience_change(current, delta);
            assert!((0..=100).contains(&value), "{} + {} gave {}", current, delta, value);
        }
    }
}

#[test]
fn job_security_bands_partition_the_meter() {
    let expected = |v: i32| match v {
        70..=100 => JobSecurityLevel::Secure,
        50..=69 => JobSecurityLevel::Stable,
        35..=49 => JobSecurityLevel::WarmSeat,
        20..=34 => JobSecurityLevel::HotSeat,
        _ => JobSecurityLevel::Fired,
    };

    for value in 0..=100 {
        assert_eq!(JobSecurityLevel::from_value(value), expected(value));
    }
}

#[test]
fn defiance_penalty_grows_with_consecutive_defiances() {
    let owner = owner(OwnerTraits::new(50, 50, 50, 50, 50), 80);

    let first = calculate_defiance_consequence(&owner, DemandType::TradeFor, 0, 80);
    let third = calculate_defiance_consequence(&owner, DemandType::TradeFor, 2, 80);

    assert!(third.patience_change < first.patience_change);
}

#[test]
fn compliance_clears_the_defiance_run() {
    let mut state = InterferenceState::new(4);

    for idx in 0..3 {
        let demand = demand(&format!("d-{}", idx));
        state.register_demand(&demand).unwrap();
        state.record_defiance(&demand, 4);
    }
    assert_eq!(state.consecutive_defiances, 3);

    let demand = demand("d-last");
    state.register_demand(&demand).unwrap();
    state.record_compliance(&demand, 5);

    assert_eq!(state.consecutive_defiances, 0);
    assert!(state.is_valid());
}

#[test]
fn compliance_rate() {
    let mut state = InterferenceState::new(4);
    assert_eq!(state.get_compliance_rate(), None);

    state.total_compliances = 7;
    state.total_defiances = 3;

    assert_eq!(state.get_compliance_rate(), Some(70.0));
}

#[test]
fn mood_decays_towards_neutral_without_overshooting() {
    let mut mood = OwnerMoodState::with_value(4, 80.0);
    let mut previous = mood.mood_value();

    for _ in 0..200 {
        mood.apply_mood_decay();

        assert!(mood.mood_value() <= previous);
        assert!(mood.mood_value() >= MOOD_NEUTRAL);
        previous = mood.mood_value();
    }

    assert!((mood.mood_value() - MOOD_NEUTRAL).abs() < 0.01);
}

#[test]
fn minimum_wins_without_playoff_pressure_is_met() {
    let expectation = SeasonExpectation {
        season: 1,
        phase: TeamPhase::Development,
        minimum_wins: 6,
        target_wins: 8,
        playoffs_expected: false,
        minimum_playoff_rounds: 0,
        required_goals: Vec::new(),
        flexibility: FlexibilityLevel::Moderate,
    };
    let result = |wins: u32| SeasonResult {
        wins,
        losses: 17 - wins,
        playoff_result: None,
        completed_goals: Vec::new(),
    };

    let at_minimum = evaluate_season_expectations(&expectation, &result(6));
    let below = evaluate_season_expectations(&expectation, &result(5));

    assert!(at_minimum.met);
    assert!(at_minimum.score >= 60);
    assert!(below.score < at_minimum.score);
}

#[test]
fn ownership_change_probability_is_monotonic_and_capped() {
    let context = TeamContext::new(4, String::from("Ridgeview Foxes"), MarketSize::Small, 30);
    let mut owner = owner(OwnerTraits::default(), 60);

    for tenure in [0, 10, 21, 31, 60] {
        owner.years_as_owner = tenure;

        let mut previous = 0.0;
        for years in 0..80 {
            let probability = calculate_ownership_change_probability(&owner, years, &context);

            assert!(probability >= previous);
            assert!(probability <= MAX_CHANGE_PROBABILITY);
            previous = probability;
        }
    }

    let mut by_tenure = Vec::new();
    for tenure in [0, 10, 21, 31, 60] {
        owner.years_as_owner = tenure;
        by_tenure.push(calculate_ownership_change_probability(&owner, 12, &context));
    }
    assert!(by_tenure.windows(2).all(|pair| pair[0] <= pair[1]));
}
