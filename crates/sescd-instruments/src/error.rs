use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{} score entries failed validation", .0.len())]
    InvalidEntries(Vec<ValidationError>),
}
