use crate::mood::OwnerMoodState;
use crate::utils::RandomSource;
use serde::{Deserialize, Serialize};

pub const SUPPORT_STREAK: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatementType {
    Praise,
    Support,
    Concern,
    Criticism,
    Warning,
}

impl StatementType {
    fn templates(&self) -> &'static [&'static str] {
        match self {
            StatementType::Praise => &[
                "{owner} says the organization has never been in better hands.",
                "{owner} praised the front office for building a winner.",
            ],
            StatementType::Support => &[
                "{owner} says the team is heading in the right direction.",
                "{owner} backed the general manager in a radio interview.",
            ],
            StatementType::Concern => &[
                "{owner} admits the results have been disappointing.",
                "{owner} says everyone in the building needs to be better.",
            ],
            StatementType::Criticism => &[
                "{owner} openly questioned recent front office decisions.",
                "{owner} says the current direction is not acceptable.",
            ],
            StatementType::Warning => &[
                "{owner} says changes are coming if things do not turn around.",
                "{owner} declined to give the general manager a vote of confidence.",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStatement {
    pub statement_type: StatementType,
    pub week: u32,
    pub text: String,
}

/// Maps the current mood onto a public statement, if the owner has
/// anything to say.
pub fn should_make_public_statement(state: &OwnerMoodState) -> Option<StatementType> {
    let value = state.mood_value();

    if value >= 85.0 {
        Some(StatementType::Praise)
    } else if value >= 70.0 && state.satisfaction_streak() >= SUPPORT_STREAK {
        Some(StatementType::Support)
    } else if value <= 10.0 {
        Some(StatementType::Warning)
    } else if value <= 20.0 {
        Some(StatementType::Criticism)
    } else if value <= 30.0 {
        Some(StatementType::Concern)
    } else {
        None
    }
}

pub fn generate_public_statement(
    owner_name: &str,
    statement_type: StatementType,
    week: u32,
    rng: &mut dyn RandomSource,
) -> PublicStatement {
    let templates = statement_type.templates();
    let template = templates[rng.pick_index(templates.len())];

    PublicStatement {
        statement_type,
        week,
        text: template.replace("{owner}", owner_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{MoodEvent, MoodEventType, MoodImpact};
    use crate::utils::ScriptedRandom;

    #[test]
    fn test_statement_bands() {
        let cases = [
            (95.0, Some(StatementType::Praise)),
            (85.0, Some(StatementType::Praise)),
            (75.0, None),
            (50.0, None),
            (30.0, Some(StatementType::Concern)),
            (20.5, Some(StatementType::Concern)),
            (20.0, Some(StatementType::Criticism)),
            (10.5, Some(StatementType::Criticism)),
            (10.0, Some(StatementType::Warning)),
            (0.0, Some(StatementType::Warning)),
        ];

        for (value, expected) in cases {
            assert_eq!(should_make_public_statement(&OwnerMoodState::with_value(1, value)), expected, "{}", value);
        }
    }

    #[test]
    fn test_support_needs_a_streak() {
        let mut state = OwnerMoodState::with_value(1, 66.0);

        for _ in 0..3 {
            state.process_mood_event(MoodEvent {
                event_type: MoodEventType::Win,
                week: 1,
                description: String::new(),
                impact: MoodImpact::new(2, 1, 0),
            });
        }

        assert_eq!(state.mood_value(), 72.0);
        assert_eq!(should_make_public_statement(&state), Some(StatementType::Support));
    }

    #[test]
    fn test_statement_text_names_owner() {
        let mut rng = ScriptedRandom::constant(0.0);
        let statement = generate_public_statement("Walter Greer", StatementType::Warning, 9, &mut rng);

        assert!(statement.text.starts_with("Walter Greer"));
        assert_eq!(statement.week, 9);
    }
}
