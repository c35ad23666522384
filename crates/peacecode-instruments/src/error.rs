use thiserror::Error;

use peacecode_core::models::instrument_id::InstrumentId;

/// Caller-input failures from scoring. None of these are retryable; the
/// engine never returns a partial score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("{instrument} expects {expected} responses, got {actual}")]
    InvalidResponseLength {
        instrument: InstrumentId,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument} item {item}: option {index} is out of range (item has {options} options)")]
    InvalidOptionIndex {
        instrument: InstrumentId,
        item: usize,
        index: usize,
        options: usize,
    },

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument} has no item at index {item}")]
    NoSuchItem { instrument: InstrumentId, item: usize },

    #[error("assessment incomplete: {answered} of {total} items answered")]
    Incomplete { answered: usize, total: usize },

    #[error("{instrument} has no severity band covering score {total}")]
    NoSeverityBand { instrument: InstrumentId, total: u32 },
}

/// Problems with an instrument definition, caught when a registry is built.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{instrument}: invalid severity bands: {reason}")]
    InvalidBandTable {
        instrument: InstrumentId,
        reason: String,
    },

    #[error("{0} registered more than once")]
    DuplicateInstrument(InstrumentId),
}
