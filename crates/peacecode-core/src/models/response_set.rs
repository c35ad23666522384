use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument_id::InstrumentId;

/// One respondent's answers to one instrument.
///
/// `selections[i]` is the 0-based index of the option chosen for item `i`.
/// A set is only eligible for scoring once every item has an answer; partial
/// answers live in the caller's draft state, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    pub instrument: InstrumentId,
    pub selections: Vec<usize>,
}

impl ResponseSet {
    pub fn new(instrument: InstrumentId, selections: Vec<usize>) -> Self {
        Self {
            instrument,
            selections,
        }
    }
}
