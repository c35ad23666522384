use std::collections::HashSet;

use jiff::Timestamp;

use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::response_set::ResponseSet;
use peacecode_core::models::result::ScreeningResult;

use crate::error::{InstrumentError, ScreeningError};
use crate::{Instrument, all_instruments, engine};

/// Read-only set of instruments, checked once at construction.
///
/// Build one at start-up and share it by reference (or `Arc`); nothing in it
/// changes afterwards.
pub struct Registry {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Registry {
    pub fn new(instruments: Vec<Box<dyn Instrument>>) -> Result<Self, InstrumentError> {
        let mut seen = HashSet::new();
        for instrument in &instruments {
            if !seen.insert(instrument.id()) {
                return Err(InstrumentError::DuplicateInstrument(instrument.id()));
            }
            check_bands(instrument.as_ref())?;
        }
        Ok(Self { instruments })
    }

    /// PHQ-9, GAD-7 and GHQ-12.
    pub fn standard() -> Result<Self, InstrumentError> {
        Self::new(all_instruments())
    }

    pub fn get(&self, id: InstrumentId) -> Option<&dyn Instrument> {
        self.instruments
            .iter()
            .find(|i| i.id() == id)
            .map(|i| i.as_ref())
    }

    /// Resolve an instrument from its name or slug.
    pub fn lookup(&self, id: &str) -> Result<&dyn Instrument, ScreeningError> {
        id.parse::<InstrumentId>()
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| ScreeningError::UnknownInstrument(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.instruments.iter().map(|i| i.as_ref())
    }

    pub fn score(&self, responses: &ResponseSet) -> Result<ScreeningResult, ScreeningError> {
        self.score_at(responses, Timestamp::now())
    }

    pub fn score_at(
        &self,
        responses: &ResponseSet,
        completed_at: Timestamp,
    ) -> Result<ScreeningResult, ScreeningError> {
        let instrument = self
            .get(responses.instrument)
            .ok_or_else(|| ScreeningError::UnknownInstrument(responses.instrument.to_string()))?;
        engine::score_at(instrument, &responses.selections, completed_at)
    }
}

/// Bands must be non-empty, ascending, contiguous, and cover exactly
/// `min_score..=max_score`.
fn check_bands(instrument: &dyn Instrument) -> Result<(), InstrumentError> {
    let invalid = |reason: String| InstrumentError::InvalidBandTable {
        instrument: instrument.id(),
        reason,
    };

    let bands = instrument.bands();
    let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
        return Err(invalid("no bands defined".to_string()));
    };

    if first.min != instrument.min_score() {
        return Err(invalid(format!(
            "first band '{}' starts at {}, lowest possible score is {}",
            first.name,
            first.min,
            instrument.min_score()
        )));
    }
    if last.max != instrument.max_score() {
        return Err(invalid(format!(
            "last band '{}' ends at {}, highest possible score is {}",
            last.name,
            last.max,
            instrument.max_score()
        )));
    }
    for band in bands {
        if band.min > band.max {
            return Err(invalid(format!(
                "band '{}' has min {} above max {}",
                band.name, band.min, band.max
            )));
        }
    }
    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let kind = if next.min <= prev.max {
            "overlaps"
        } else if prev.max.checked_add(1) != Some(next.min) {
            "leaves a gap after"
        } else {
            continue;
        };
        return Err(invalid(format!(
            "band '{}' ({}-{}) {kind} '{}' ({}-{})",
            next.name, next.min, next.max, prev.name, prev.min, prev.max
        )));
    }
    Ok(())
}
