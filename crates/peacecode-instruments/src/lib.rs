//! peacecode-instruments
//!
//! Screening instrument definitions and the scoring engine. Pure data and
//! pure functions: no I/O, no logging, no shared mutable state. Definitions
//! are built once per process and only ever read afterwards.

pub mod draft;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod registry;
pub mod scoring;

use peacecode_core::models::instrument_id::InstrumentId;

use error::ScreeningError;
use scoring::{Question, RiskRule, ScoringRule, SeverityBand};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Published short name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// What the instrument screens for (e.g., "Depression Screening").
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn estimated_duration(&self) -> &str;

    /// Lead-in shown above every item.
    fn prompt_stem(&self) -> &str;

    /// Items in administration order.
    fn questions(&self) -> &[Question];

    fn scoring_rule(&self) -> ScoringRule;

    /// Severity bands, ascending by lower bound.
    fn bands(&self) -> &[SeverityBand];

    fn risk_rule(&self) -> RiskRule;

    /// Banner text shown alongside a high-risk result.
    fn risk_message(&self) -> &str;

    fn item_count(&self) -> usize {
        self.questions().len()
    }

    fn min_score(&self) -> u32 {
        self.scoring_rule().min_total(self.questions())
    }

    fn max_score(&self) -> u32 {
        self.scoring_rule().max_total(self.questions())
    }

    /// First band, in ascending order, whose range contains `total`.
    fn band_for(&self, total: u32) -> Option<&SeverityBand> {
        self.bands().iter().find(|b| b.contains(total))
    }

    /// Check that `selections` is a complete, in-range answer set.
    fn validate_selections(&self, selections: &[usize]) -> Result<(), ScreeningError> {
        let questions = self.questions();
        if selections.len() != questions.len() {
            return Err(ScreeningError::InvalidResponseLength {
                instrument: self.id(),
                expected: questions.len(),
                actual: selections.len(),
            });
        }
        for (question, &index) in questions.iter().zip(selections) {
            if question.option(index).is_none() {
                return Err(ScreeningError::InvalidOptionIndex {
                    instrument: self.id(),
                    item: question.number,
                    index,
                    options: question.options.len(),
                });
            }
        }
        Ok(())
    }

    /// Apply the scoring rule to a validated answer set.
    fn total_score(&self, selections: &[usize]) -> Result<u32, ScreeningError> {
        self.validate_selections(selections)?;
        let rule = self.scoring_rule();
        Ok(self
            .questions()
            .iter()
            .zip(selections)
            .filter_map(|(q, &i)| q.option(i))
            .map(|o| rule.item_points(o.value))
            .sum())
    }

    fn is_high_risk(&self, total: u32, selections: &[usize]) -> bool {
        let rule = self.risk_rule();
        if total >= rule.score_at_least {
            return true;
        }
        let Some(critical) = rule.critical_item else {
            return false;
        };
        critical
            .number
            .checked_sub(1)
            .and_then(|i| Some((self.questions().get(i)?, *selections.get(i)?)))
            .and_then(|(q, index)| q.option(index))
            .is_some_and(|o| o.value > critical.above_value)
    }
}

/// Return all standard instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::ghq12::Ghq12),
    ]
}

/// Look up a standard instrument by ID.
pub fn get_instrument(id: InstrumentId) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
