use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument_id::InstrumentId;
use super::severity::SeverityTone;

/// Number of recommendations shown in a compact result listing.
pub const HEADLINE_RECOMMENDATIONS: usize = 3;

/// The outcome of scoring one completed response set.
///
/// Immutable once produced; the engine keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub instrument: InstrumentId,
    pub total_score: u32,
    /// Highest total the instrument can produce, for "score/max" display.
    pub max_score: u32,
    pub severity: String,
    pub tone: SeverityTone,
    pub recommendations: Vec<String>,
    pub high_risk: bool,
    pub completed_at: jiff::Timestamp,
}

impl ScreeningResult {
    pub fn headline_recommendations(&self) -> &[String] {
        let n = self.recommendations.len().min(HEADLINE_RECOMMENDATIONS);
        &self.recommendations[..n]
    }
}
