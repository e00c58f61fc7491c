use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("question set is empty")]
    EmptyQuestionSet,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),

    #[error("question {question_id} has no options")]
    NoOptions { question_id: u32 },

    #[error("options for question {question_id} are not ordered from least to most severe")]
    UnorderedOptions { question_id: u32 },

    #[error("question {question_id} scores [{min}, {max}], expected [0, {expected_max}]")]
    MismatchedOptionRange {
        question_id: u32,
        min: u8,
        max: u8,
        expected_max: u8,
    },

    #[error("maximum option score is zero")]
    ZeroMaxScore,

    #[error("band table is empty")]
    EmptyBandTable,

    #[error("band bound {0} is not above the previous bound")]
    UnorderedBands(u8),

    #[error("band bound {0} is outside 1..=100")]
    BoundOutOfRange(u8),

    #[error("band table has no catch-all band")]
    MissingCatchAll,

    #[error("catch-all band must be the last band")]
    MisplacedCatchAll,

    #[error("unknown question id {0}")]
    UnknownQuestion(u32),

    #[error("score {score} is not an option for question {question_id}")]
    InvalidOptionScore { question_id: u32, score: u8 },

    #[error("assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}
