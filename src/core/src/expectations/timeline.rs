use crate::owner::{OwnerPersonality, SecondaryTrait};
use crate::team::TeamPhase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrgencyLevel {
    Relaxed,
    Patient,
    Moderate,
    Pressing,
    Critical,
}

impl UrgencyLevel {
    pub fn description(&self) -> &'static str {
        match self {
            UrgencyLevel::Relaxed => "The owner is willing to wait",
            UrgencyLevel::Patient => "The owner is giving the plan time",
            UrgencyLevel::Moderate => "The owner wants to see progress",
            UrgencyLevel::Pressing => "The owner expects results soon",
            UrgencyLevel::Critical => "The owner needs results now",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LongTermGoal {
    BuildYoungCore,
    BecomePlayoffTeam,
    ContendForTitle,
    WinChampionship,
    SustainDynasty,
}

impl LongTermGoal {
    pub fn for_phase(phase: TeamPhase) -> Self {
        match phase {
            TeamPhase::Rebuild => LongTermGoal::BuildYoungCore,
            TeamPhase::Development => LongTermGoal::BecomePlayoffTeam,
            TeamPhase::Competitive => LongTermGoal::ContendForTitle,
            TeamPhase::Contender => LongTermGoal::WinChampionship,
            TeamPhase::Dynasty => LongTermGoal::SustainDynasty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTermExpectation {
    pub goal: LongTermGoal,
    pub total_years: u32,
    /// 1-based year within the plan.
    pub current_year: u32,
    /// 0-100, how far off plan the owner will tolerate.
    pub tolerance: i32,
}

impl LongTermExpectation {
    pub fn years_remaining(&self) -> i32 {
        self.total_years as i32 - self.current_year as i32
    }

    pub fn is_finished(&self) -> bool {
        self.current_year > self.total_years
    }

    pub fn adjust_tolerance(&mut self, delta: i32) {
        self.tolerance = (self.tolerance + delta).clamp(0, 100);
    }

    pub fn is_valid(&self) -> bool {
        self.total_years > 0 && self.current_year >= 1 && (0..=100).contains(&self.tolerance)
    }
}

fn plan_length(phase: TeamPhase, personality: &OwnerPersonality) -> u32 {
    let base: i32 = match phase {
        TeamPhase::Rebuild => 5,
        TeamPhase::Development => 4,
        TeamPhase::Competitive | TeamPhase::Contender => 3,
        TeamPhase::Dynasty => 2,
    };

    let patience = personality.traits.patience;
    let adjustment = if patience >= 70 {
        1
    } else if patience <= 30 {
        -1
    } else {
        0
    };

    let title_rush = if personality.has_trait(SecondaryTrait::WinNow) { -1 } else { 0 };

    (base + adjustment + title_rush).max(2) as u32
}

pub fn generate_long_term_expectation(phase: TeamPhase, personality: &OwnerPersonality) -> LongTermExpectation {
    let traits = &personality.traits;

    LongTermExpectation {
        goal: LongTermGoal::for_phase(phase),
        total_years: plan_length(phase, personality),
        current_year: 1,
        tolerance: ((traits.patience + traits.loyalty) / 2).clamp(0, 100),
    }
}

/// Same goal, fresh clock, tolerance carried over.
pub fn renew_long_term_expectation(
    previous: &LongTermExpectation,
    phase: TeamPhase,
    personality: &OwnerPersonality,
) -> LongTermExpectation {
    LongTermExpectation {
        tolerance: previous.tolerance,
        ..generate_long_term_expectation(phase, personality)
    }
}

pub fn calculate_urgency(long_term: &LongTermExpectation, current_year: u32) -> UrgencyLevel {
    let remaining = long_term.total_years as i32 - current_year as i32;
    let tolerance = long_term.tolerance;

    match remaining {
        r if r <= 0 => {
            if tolerance >= 60 {
                UrgencyLevel::Pressing
            } else {
                UrgencyLevel::Critical
            }
        }
        1 => {
            if tolerance >= 70 {
                UrgencyLevel::Moderate
            } else if tolerance >= 40 {
                UrgencyLevel::Pressing
            } else {
                UrgencyLevel::Critical
            }
        }
        2 => {
            if tolerance >= 60 {
                UrgencyLevel::Patient
            } else if tolerance >= 30 {
                UrgencyLevel::Moderate
            } else {
                UrgencyLevel::Pressing
            }
        }
        _ => {
            if tolerance >= 50 {
                UrgencyLevel::Relaxed
            } else if tolerance >= 25 {
                UrgencyLevel::Patient
            } else {
                UrgencyLevel::Moderate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OwnerTraits;

    fn long_term(total_years: u32, tolerance: i32) -> LongTermExpectation {
        LongTermExpectation {
            goal: LongTermGoal::ContendForTitle,
            total_years,
            current_year: 1,
            tolerance,
        }
    }

    #[test]
    fn test_urgency_tree() {
        let cases = [
            (5, 5, 60, UrgencyLevel::Pressing),
            (5, 7, 59, UrgencyLevel::Critical),
            (5, 4, 70, UrgencyLevel::Moderate),
            (5, 4, 40, UrgencyLevel::Pressing),
            (5, 4, 39, UrgencyLevel::Critical),
            (5, 3, 60, UrgencyLevel::Patient),
            (5, 3, 30, UrgencyLevel::Moderate),
            (5, 3, 29, UrgencyLevel::Pressing),
            (5, 1, 50, UrgencyLevel::Relaxed),
            (5, 1, 25, UrgencyLevel::Patient),
            (5, 1, 24, UrgencyLevel::Moderate),
        ];

        for (total, year, tolerance, expected) in cases {
            assert_eq!(
                calculate_urgency(&long_term(total, tolerance), year),
                expected,
                "total {} year {} tolerance {}",
                total,
                year,
                tolerance
            );
        }
    }

    #[test]
    fn test_plan_length_follows_owner() {
        let patient = OwnerPersonality::new(OwnerTraits::new(80, 50, 50, 60, 50), Vec::new());
        let hurried = OwnerPersonality::new(OwnerTraits::new(20, 50, 50, 50, 50), vec![SecondaryTrait::WinNow]);

        let plan = generate_long_term_expectation(TeamPhase::Rebuild, &patient);
        assert_eq!(plan.total_years, 6);
        assert_eq!(plan.tolerance, 70);
        assert_eq!(plan.goal, LongTermGoal::BuildYoungCore);

        assert_eq!(generate_long_term_expectation(TeamPhase::Dynasty, &hurried).total_years, 2);
    }

    #[test]
    fn test_renewal_keeps_tolerance() {
        let personality = OwnerPersonality::new(OwnerTraits::default(), Vec::new());
        let mut previous = long_term(3, 12);
        previous.current_year = 4;
        assert!(previous.is_finished());

        let renewed = renew_long_term_expectation(&previous, TeamPhase::Contender, &personality);
        assert_eq!(renewed.tolerance, 12);
        assert_eq!(renewed.current_year, 1);
        assert_eq!(renewed.goal, LongTermGoal::WinChampionship);
    }

    #[test]
    fn test_tolerance_clamps() {
        let mut plan = long_term(3, 95);
        plan.adjust_tolerance(10);
        assert_eq!(plan.tolerance, 100);
        plan.adjust_tolerance(-150);
        assert_eq!(plan.tolerance, 0);
    }
}
