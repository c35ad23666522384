use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument_id::InstrumentId;
use super::result::ScreeningResult;
use super::severity::SeverityTone;
use crate::error::CoreError;

/// Append-only list of completed screenings, owned by the caller.
///
/// The engine never sees this type. A workflow step takes the history in and
/// hands it back with the new result appended; storing it anywhere is the
/// caller's business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningHistory(Vec<ScreeningResult>);

/// Aggregate counts over a history, as charted on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistorySummary {
    pub total: usize,
    pub high_risk: usize,
    pub by_instrument: BTreeMap<InstrumentId, usize>,
    pub by_tone: BTreeMap<SeverityTone, usize>,
}

impl ScreeningHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: ScreeningResult) {
        self.0.push(result);
    }

    /// By-value form of [`record`](Self::record).
    pub fn with(mut self, result: ScreeningResult) -> Self {
        self.record(result);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Results in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &ScreeningResult> {
        self.0.iter()
    }

    /// Results sorted by completion time, most recent first. Ties keep
    /// recording order.
    pub fn newest_first(&self) -> Vec<&ScreeningResult> {
        let mut sorted: Vec<_> = self.0.iter().collect();
        sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sorted
    }

    /// Most recently completed result for one instrument.
    pub fn latest(&self, instrument: InstrumentId) -> Option<&ScreeningResult> {
        self.0
            .iter()
            .filter(|r| r.instrument == instrument)
            .max_by_key(|r| r.completed_at)
    }

    pub fn summary(&self) -> HistorySummary {
        let mut summary = HistorySummary {
            total: self.0.len(),
            ..HistorySummary::default()
        };
        for result in &self.0 {
            if result.high_risk {
                summary.high_risk += 1;
            }
            *summary.by_instrument.entry(result.instrument).or_default() += 1;
            *summary.by_tone.entry(result.tone).or_default() += 1;
        }
        summary
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<ScreeningResult>> for ScreeningHistory {
    fn from(results: Vec<ScreeningResult>) -> Self {
        Self(results)
    }
}

impl<'a> IntoIterator for &'a ScreeningHistory {
    type Item = &'a ScreeningResult;
    type IntoIter = std::slice::Iter<'a, ScreeningResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
