use crate::career::{CareerRecord, calculate_team_interest};
use crate::error::{FrontOfficeError, FrontOfficeResult};
use crate::owner::{Owner, SecondaryTrait};
use crate::utils::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: i32 = 3;
pub const MAX_QUESTIONS: i32 = 5;
pub const OFFER_THRESHOLD: f64 = 55.0;

/// Points for answering with the owner's first..fourth favourite approach.
const RANK_SCORES: [i32; 4] = [100, 75, 50, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterviewTopic {
    Timeline,
    Budget,
    Control,
    Analytics,
    Media,
    Philosophy,
}

impl InterviewTopic {
    pub const ALL: [InterviewTopic; 6] = [
        InterviewTopic::Timeline,
        InterviewTopic::Budget,
        InterviewTopic::Control,
        InterviewTopic::Analytics,
        InterviewTopic::Media,
        InterviewTopic::Philosophy,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            InterviewTopic::Timeline => "How long until this team is winning?",
            InterviewTopic::Budget => "How would you use the money we give you?",
            InterviewTopic::Control => "How much say should ownership have in football decisions?",
            InterviewTopic::Analytics => "What role do analytics play in how you build a roster?",
            InterviewTopic::Media => "How do you handle the press when things go wrong?",
            InterviewTopic::Philosophy => "What is your team-building philosophy?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterviewApproach {
    Aggressive,
    Balanced,
    Patient,
    Deferential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub topic: InterviewTopic,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub owner_id: u32,
    pub team_id: u32,
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewOutcome {
    pub score: i32,
    pub interest: f64,
    pub offer_extended: bool,
    pub contract_years: Option<u32>,
}

fn topics_on_owners_mind(owner: &Owner) -> Vec<InterviewTopic> {
    let personality = &owner.personality;
    let traits = &personality.traits;

    let mut topics = Vec::new();

    if traits.patience <= 35 || traits.patience >= 65 {
        topics.push(InterviewTopic::Timeline);
    }
    if traits.spending <= 35 || traits.spending >= 65 {
        topics.push(InterviewTopic::Budget);
    }
    if traits.control >= 60 {
        topics.push(InterviewTopic::Control);
    }
    if personality.has_trait(SecondaryTrait::AnalyticsBeliever) || personality.has_trait(SecondaryTrait::OldSchool) {
        topics.push(InterviewTopic::Analytics);
    }
    if personality.has_trait(SecondaryTrait::PrObsessed) || traits.ego >= 70 {
        topics.push(InterviewTopic::Media);
    }

    topics
}

/// Owner's approaches for a topic, most favoured first.
pub fn preferred_approaches(topic: InterviewTopic, owner: &Owner) -> [InterviewApproach; 4] {
    use InterviewApproach::*;

    let personality = &owner.personality;
    let traits = &personality.traits;

    match topic {
        InterviewTopic::Timeline if traits.patience >= 60 => [Patient, Balanced, Deferential, Aggressive],
        InterviewTopic::Timeline if traits.patience <= 40 => [Aggressive, Balanced, Deferential, Patient],
        InterviewTopic::Budget if traits.spending >= 60 => [Aggressive, Balanced, Deferential, Patient],
        InterviewTopic::Budget if traits.spending <= 40 => [Patient, Balanced, Deferential, Aggressive],
        InterviewTopic::Control if traits.control >= 60 => [Deferential, Balanced, Patient, Aggressive],
        InterviewTopic::Control if traits.control <= 40 => [Aggressive, Balanced, Patient, Deferential],
        InterviewTopic::Analytics if personality.has_trait(SecondaryTrait::AnalyticsBeliever) => {
            [Aggressive, Balanced, Patient, Deferential]
        }
        InterviewTopic::Analytics if personality.has_trait(SecondaryTrait::OldSchool) => {
            [Deferential, Balanced, Patient, Aggressive]
        }
        InterviewTopic::Media if personality.has_trait(SecondaryTrait::PrObsessed) || traits.ego >= 70 => {
            [Aggressive, Balanced, Deferential, Patient]
        }
        InterviewTopic::Philosophy
            if personality.has_trait(SecondaryTrait::WinNow)
                || personality.has_trait(SecondaryTrait::ChampionshipOrBust) =>
        {
            [Aggressive, Balanced, Deferential, Patient]
        }
        InterviewTopic::Philosophy if personality.has_trait(SecondaryTrait::LongTermThinker) => {
            [Patient, Balanced, Deferential, Aggressive]
        }
        _ => [Balanced, Patient, Deferential, Aggressive],
    }
}

pub fn score_answer(topic: InterviewTopic, approach: InterviewApproach, owner: &Owner) -> i32 {
    preferred_approaches(topic, owner)
        .iter()
        .position(|a| *a == approach)
        .map(|rank| RANK_SCORES[rank])
        .unwrap_or(0)
}

/// Contract length offered, longer from patient owners.
pub fn contract_years_for(owner: &Owner) -> u32 {
    match owner.personality.traits.patience {
        p if p >= 75 => 5,
        p if p >= 55 => 4,
        p if p >= 35 => 3,
        _ => 2,
    }
}

pub struct InterviewSystem;

impl InterviewSystem {
    /// Three to five questions, led by what the owner cares about.
    pub fn generate_interview(owner: &Owner, rng: &mut dyn RandomSource) -> Interview {
        let count = rng.range_int(MIN_QUESTIONS, MAX_QUESTIONS) as usize;

        let mut topics = topics_on_owners_mind(owner);
        for topic in InterviewTopic::ALL.iter().rev() {
            if !topics.contains(topic) {
                topics.push(*topic);
            }
        }
        topics.truncate(count);

        Interview {
            owner_id: owner.id,
            team_id: owner.team_id,
            questions: topics
                .into_iter()
                .map(|topic| InterviewQuestion {
                    topic,
                    prompt: String::from(topic.prompt()),
                })
                .collect(),
        }
    }

    pub fn conduct_interview(
        record: &CareerRecord,
        owner: &Owner,
        interview: &Interview,
        answers: &[InterviewApproach],
    ) -> FrontOfficeResult<InterviewOutcome> {
        if answers.len() != interview.questions.len() || answers.is_empty() {
            return Err(FrontOfficeError::InvalidInterviewAnswers {
                expected: interview.questions.len(),
                actual: answers.len(),
            });
        }

        let total: i32 = interview
            .questions
            .iter()
            .zip(answers)
            .map(|(question, approach)| score_answer(question.topic, *approach, owner))
            .sum();

        let score = (total as f64 / answers.len() as f64).round() as i32;
        let interest = calculate_team_interest(record, owner);

        let offer_extended = 0.5 * interest + 0.5 * score as f64 >= OFFER_THRESHOLD;

        debug!(
            "owner: {}, interview with {} scored {}, interest {:.1}, offer: {}",
            owner.name, record.gm_name, score, interest, offer_extended
        );

        Ok(InterviewOutcome {
            score,
            interest,
            offer_extended,
            contract_years: offer_extended.then(|| contract_years_for(owner)),
        })
    }
}
