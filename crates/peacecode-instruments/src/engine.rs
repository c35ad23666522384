use jiff::Timestamp;

use peacecode_core::models::result::ScreeningResult;

use crate::Instrument;
use crate::error::ScreeningError;

/// Score a completed answer set, stamped with the current time.
pub fn score(
    instrument: &dyn Instrument,
    selections: &[usize],
) -> Result<ScreeningResult, ScreeningError> {
    score_at(instrument, selections, Timestamp::now())
}

/// Score a completed answer set with a caller-supplied timestamp.
///
/// Fails atomically on malformed input; there is no partial result.
pub fn score_at(
    instrument: &dyn Instrument,
    selections: &[usize],
    completed_at: Timestamp,
) -> Result<ScreeningResult, ScreeningError> {
    let total = instrument.total_score(selections)?;
    let band = instrument
        .band_for(total)
        .ok_or(ScreeningError::NoSeverityBand {
            instrument: instrument.id(),
            total,
        })?;

    Ok(ScreeningResult {
        instrument: instrument.id(),
        total_score: total,
        max_score: instrument.max_score(),
        severity: band.name.clone(),
        tone: band.tone,
        recommendations: band.recommendations.clone(),
        high_risk: instrument.is_high_risk(total, selections),
        completed_at,
    })
}
