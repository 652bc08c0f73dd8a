use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("score {0} is outside range [0, 3]")]
    ScoreOutOfRange(i64),
}
