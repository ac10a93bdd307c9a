use serde::{Deserialize, Serialize};

pub const PATIENCE_MIN: i32 = 0;
pub const PATIENCE_MAX: i32 = 100;

/// Personality adjustment never moves an impact by more than this share.
const MAX_PERSONALITY_ADJUSTMENT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobSecurityLevel {
    Fired,
    HotSeat,
    WarmSeat,
    Stable,
    Secure,
}

/// Lower bound of each band, highest first. Bands partition `[0, 100]`.
pub const JOB_SECURITY_THRESHOLDS: [(JobSecurityLevel, i32); 5] = [
    (JobSecurityLevel::Secure, 70),
    (JobSecurityLevel::Stable, 50),
    (JobSecurityLevel::WarmSeat, 35),
    (JobSecurityLevel::HotSeat, 20),
    (JobSecurityLevel::Fired, PATIENCE_MIN),
];

impl JobSecurityLevel {
    pub fn from_value(value: i32) -> Self {
        JOB_SECURITY_THRESHOLDS
            .iter()
            .find(|(_, min)| value >= *min)
            .map(|(level, _)| *level)
            .unwrap_or(JobSecurityLevel::Fired)
    }

    pub fn description(&self) -> &'static str {
        match self {
            JobSecurityLevel::Secure => "secure",
            JobSecurityLevel::Stable => "stable",
            JobSecurityLevel::WarmSeat => "warm seat",
            JobSecurityLevel::HotSeat => "hot seat",
            JobSecurityLevel::Fired => "danger",
        }
    }
}

pub fn apply_patience_change(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).clamp(PATIENCE_MIN, PATIENCE_MAX)
}

pub fn get_job_security_level(value: i32) -> JobSecurityLevel {
    JobSecurityLevel::from_value(value)
}

/// Every event that can move an owner's patience meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatienceEventType {
    WinningSeason,
    LosingSeason,
    PlayoffAppearance,
    MissedPlayoffs,
    ChampionshipWin,
    ExceededExpectations,
    MetExpectations,
    MissedExpectations,
    BigWin,
    BadLoss,
    WinningStreak,
    LosingStreak,
    Scandal,
    DraftSuccess,
    DraftBust,
    StarSigned,
    StarLost,
    FanApprovalHigh,
    FanApprovalLow,
    PlayoffQualified,
    WildCardLoss,
    DivisionalLoss,
    ConferenceLoss,
    ChampionshipGameLoss,
    MajorTradeSuccess,
    MajorTradeFailure,
    PositivePress,
    NegativePress,
    DemandComplied,
    DemandDefied,
    CoachFired,
}

impl PatienceEventType {
    pub const ALL: [PatienceEventType; 31] = [
        PatienceEventType::WinningSeason,
        PatienceEventType::LosingSeason,
        PatienceEventType::PlayoffAppearance,
        PatienceEventType::MissedPlayoffs,
        PatienceEventType::ChampionshipWin,
        PatienceEventType::ExceededExpectations,
        PatienceEventType::MetExpectations,
        PatienceEventType::MissedExpectations,
        PatienceEventType::BigWin,
        PatienceEventType::BadLoss,
        PatienceEventType::WinningStreak,
        PatienceEventType::LosingStreak,
        PatienceEventType::Scandal,
        PatienceEventType::DraftSuccess,
        PatienceEventType::DraftBust,
        PatienceEventType::StarSigned,
        PatienceEventType::StarLost,
        PatienceEventType::FanApprovalHigh,
        PatienceEventType::FanApprovalLow,
        PatienceEventType::PlayoffQualified,
        PatienceEventType::WildCardLoss,
        PatienceEventType::DivisionalLoss,
        PatienceEventType::ConferenceLoss,
        PatienceEventType::ChampionshipGameLoss,
        PatienceEventType::MajorTradeSuccess,
        PatienceEventType::MajorTradeFailure,
        PatienceEventType::PositivePress,
        PatienceEventType::NegativePress,
        PatienceEventType::DemandComplied,
        PatienceEventType::DemandDefied,
        PatienceEventType::CoachFired,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatienceEventType::WinningSeason => "winningSeason",
            PatienceEventType::LosingSeason => "losingSeason",
            PatienceEventType::PlayoffAppearance => "playoffAppearance",
            PatienceEventType::MissedPlayoffs => "missedPlayoffs",
            PatienceEventType::ChampionshipWin => "championshipWin",
            PatienceEventType::ExceededExpectations => "exceededExpectations",
            PatienceEventType::MetExpectations => "metExpectations",
            PatienceEventType::MissedExpectations => "missedExpectations",
            PatienceEventType::BigWin => "bigWin",
            PatienceEventType::BadLoss => "badLoss",
            PatienceEventType::WinningStreak => "winningStreak",
            PatienceEventType::LosingStreak => "losingStreak",
            PatienceEventType::Scandal => "scandal",
            PatienceEventType::DraftSuccess => "draftSuccess",
            PatienceEventType::DraftBust => "draftBust",
            PatienceEventType::StarSigned => "starSigned",
            PatienceEventType::StarLost => "starLost",
            PatienceEventType::FanApprovalHigh => "fanApprovalHigh",
            PatienceEventType::FanApprovalLow => "fanApprovalLow",
            PatienceEventType::PlayoffQualified => "playoffQualified",
            PatienceEventType::WildCardLoss => "wildCardLoss",
            PatienceEventType::DivisionalLoss => "divisionalLoss",
            PatienceEventType::ConferenceLoss => "conferenceLoss",
            PatienceEventType::ChampionshipGameLoss => "championshipGameLoss",
            PatienceEventType::MajorTradeSuccess => "majorTradeSuccess",
            PatienceEventType::MajorTradeFailure => "majorTradeFailure",
            PatienceEventType::PositivePress => "positivePress",
            PatienceEventType::NegativePress => "negativePress",
            PatienceEventType::DemandComplied => "demandComplied",
            PatienceEventType::DemandDefied => "demandDefied",
            PatienceEventType::CoachFired => "coachFired",
        }
    }

    /// Unknown names yield `None`; callers treat that as a zero impact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatienceModifier {
    pub event: PatienceEventType,
    pub min_impact: i32,
    pub max_impact: i32,
}

const fn modifier(event: PatienceEventType, min_impact: i32, max_impact: i32) -> PatienceModifier {
    PatienceModifier {
        event,
        min_impact,
        max_impact,
    }
}

pub const PATIENCE_MODIFIERS: [PatienceModifier; 19] = [
    modifier(PatienceEventType::WinningSeason, 5, 10),
    modifier(PatienceEventType::LosingSeason, -15, -8),
    modifier(PatienceEventType::PlayoffAppearance, 8, 15),
    modifier(PatienceEventType::MissedPlayoffs, -10, -5),
    modifier(PatienceEventType::ChampionshipWin, 20, 30),
    modifier(PatienceEventType::ExceededExpectations, 8, 15),
    modifier(PatienceEventType::MetExpectations, 2, 5),
    modifier(PatienceEventType::MissedExpectations, -15, -8),
    modifier(PatienceEventType::BigWin, 1, 3),
    modifier(PatienceEventType::BadLoss, -4, -2),
    modifier(PatienceEventType::WinningStreak, 2, 5),
    modifier(PatienceEventType::LosingStreak, -8, -3),
    modifier(PatienceEventType::Scandal, -20, -10),
    modifier(PatienceEventType::DraftSuccess, 2, 6),
    modifier(PatienceEventType::DraftBust, -6, -2),
    modifier(PatienceEventType::StarSigned, 3, 7),
    modifier(PatienceEventType::StarLost, -8, -3),
    modifier(PatienceEventType::FanApprovalHigh, 2, 4),
    modifier(PatienceEventType::FanApprovalLow, -5, -2),
];

pub fn find_patience_modifier(event: PatienceEventType) -> Option<&'static PatienceModifier> {
    PATIENCE_MODIFIERS.iter().find(|m| m.event == event)
}

/// Interpolates the modifier range by `random_factor` and bends the result
/// by owner patience: patient owners amplify good news and soften bad news,
/// impatient owners do the opposite.
pub fn scale_modifier(modifier: &PatienceModifier, owner_patience: i32, random_factor: f64) -> i32 {
    let random_factor = random_factor.clamp(0.0, 1.0);
    let span = (modifier.max_impact - modifier.min_impact) as f64;
    let base = modifier.min_impact as f64 + span * random_factor;

    let personality_factor = ((owner_patience - 50) as f64 / 100.0)
        .clamp(-MAX_PERSONALITY_ADJUSTMENT, MAX_PERSONALITY_ADJUSTMENT);

    let scaled = if base >= 0.0 {
        base * (1.0 + personality_factor)
    } else {
        base * (1.0 - personality_factor)
    };

    scaled.round() as i32
}

/// Impact from the standard table. Events outside the table yield 0.
pub fn calculate_patience_impact(
    event: PatienceEventType,
    owner_patience: i32,
    random_factor: f64,
) -> i32 {
    find_patience_modifier(event)
        .map(|m| scale_modifier(m, owner_patience, random_factor))
        .unwrap_or(0)
}

pub fn describe_patience(value: i32) -> &'static str {
    match value {
        v if v >= 85 => "completely confident in you",
        v if v >= 70 => "confident in you",
        v if v >= 50 => "satisfied for now",
        v if v >= 35 => "growing restless",
        v if v >= 20 => "losing faith",
        _ => "ready to make a change",
    }
}

pub fn describe_trust(value: i32) -> &'static str {
    match value {
        v if v >= 80 => "gives you full autonomy",
        v if v >= 60 => "trusts your judgment",
        v if v >= 40 => "wants to be consulted",
        v if v >= 20 => "second-guesses your moves",
        _ => "questions every decision",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patience_change_clamps() {
        for current in [0, 1, 50, 99, 100] {
            for delta in [-1000, -101, -50, -1, 0, 1, 50, 101, 1000] {
                let value = apply_patience_change(current, delta);
                assert!((PATIENCE_MIN..=PATIENCE_MAX).contains(&value));
            }
        }

        assert_eq!(apply_patience_change(40, 15), 55);
        assert_eq!(apply_patience_change(i32::MAX, i32::MAX), 100);
    }

    #[test]
    fn test_bands_partition_range() {
        for value in 0..=100 {
            let matching = JOB_SECURITY_THRESHOLDS
                .iter()
                .enumerate()
                .filter(|(index, (_, min))| {
                    let upper = if *index == 0 {
                        PATIENCE_MAX
                    } else {
                        JOB_SECURITY_THRESHOLDS[index - 1].1 - 1
                    };
                    value >= *min && value <= upper
                })
                .count();

            assert_eq!(matching, 1, "value {} matched {} bands", value, matching);
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(get_job_security_level(100), JobSecurityLevel::Secure);
        assert_eq!(get_job_security_level(70), JobSecurityLevel::Secure);
        assert_eq!(get_job_security_level(69), JobSecurityLevel::Stable);
        assert_eq!(get_job_security_level(50), JobSecurityLevel::Stable);
        assert_eq!(get_job_security_level(49), JobSecurityLevel::WarmSeat);
        assert_eq!(get_job_security_level(35), JobSecurityLevel::WarmSeat);
        assert_eq!(get_job_security_level(34), JobSecurityLevel::HotSeat);
        assert_eq!(get_job_security_level(20), JobSecurityLevel::HotSeat);
        assert_eq!(get_job_security_level(19), JobSecurityLevel::Fired);
        assert_eq!(get_job_security_level(0), JobSecurityLevel::Fired);
    }

    #[test]
    fn test_impact_interpolates_range() {
        assert_eq!(calculate_patience_impact(PatienceEventType::WinningSeason, 50, 0.0), 5);
        assert_eq!(calculate_patience_impact(PatienceEventType::WinningSeason, 50, 1.0), 10);
        assert_eq!(calculate_patience_impact(PatienceEventType::LosingSeason, 50, 0.0), -15);
    }

    #[test]
    fn test_patient_owner_dampens_bad_news() {
        let patient = calculate_patience_impact(PatienceEventType::LosingSeason, 100, 0.0);
        let impatient = calculate_patience_impact(PatienceEventType::LosingSeason, 1, 0.0);

        // -15 * 0.7 and -15 * 1.3 (adjustment capped at 30%)
        assert_eq!(patient, -11);
        assert_eq!(impatient, -20);
    }

    #[test]
    fn test_patient_owner_amplifies_good_news() {
        let patient = calculate_patience_impact(PatienceEventType::ChampionshipWin, 100, 0.0);
        let impatient = calculate_patience_impact(PatienceEventType::ChampionshipWin, 1, 0.0);

        assert_eq!(patient, 26);
        assert_eq!(impatient, 14);
    }

    #[test]
    fn test_events_outside_table_yield_zero() {
        assert_eq!(calculate_patience_impact(PatienceEventType::DemandDefied, 50, 0.5), 0);
    }

    #[test]
    fn test_event_names_round_trip() {
        for event in PatienceEventType::ALL {
            assert_eq!(PatienceEventType::from_name(event.name()), Some(event));
        }
        assert_eq!(PatienceEventType::from_name("signedMascot"), None);
    }
}
