use thiserror::Error;

use crate::practice_engine::models::PresentationForm;

/// Everything that can go wrong around question generation. The generator
/// itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("a practice session needs at least one question")]
    EmptySession,

    #[error("the practice session has already finished")]
    SessionFinished,

    #[error("the practice session is paused")]
    SessionPaused,

    #[error("not enough coins: {cost} needed, {available} available")]
    InsufficientCoins { cost: u32, available: u32 },

    #[error("response does not fit a {expected} question")]
    ResponseMismatch { expected: PresentationForm },

    #[error("the current question is not a match question")]
    NotAMatchQuestion,

    #[error("table {0} is outside the learnable range 2-30")]
    TableOutOfRange(i64),

    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PracticeResult<T> = Result<T, PracticeError>;
