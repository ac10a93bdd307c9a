use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FrontOfficeError {
    #[error("demand {0} was never issued")]
    DemandNotFound(String),

    #[error("demand {0} is no longer pending")]
    DemandAlreadyResolved(String),

    #[error("demand {0} is already on the ledger")]
    DuplicateDemand(String),

    #[error("team {0} is not part of the league")]
    TeamNotFound(u32),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("interview expects {expected} answers, got {actual}")]
    InvalidInterviewAnswers { expected: usize, actual: usize },
}

pub type FrontOfficeResult<T> = Result<T, FrontOfficeError>;
