use serde::{Deserialize, Serialize};
use ts_rs::TS;

use peacecode_core::models::severity::SeverityTone;

/// One labeled choice on an item's response scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub label: String,
    pub value: u32,
}

/// Whether agreeing with an item reflects wellbeing (`Positive`) or
/// distress (`Negative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based position within the instrument.
    pub number: usize,
    pub prompt: String,
    pub polarity: Polarity,
    pub options: Vec<ResponseOption>,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&ResponseOption> {
        self.options.get(index)
    }

    fn min_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).min().unwrap_or(0)
    }

    fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// How selected options turn into a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    /// Sum of the selected option values.
    DirectSum,
    /// One point per item whose selected value is at least `threshold`.
    ///
    /// Applied identically to positive and negative items. Published GHQ
    /// scoring guides reverse the positive items; this rule does not.
    ThresholdCount { threshold: u32 },
}

impl ScoringRule {
    /// Points contributed by one item given the selected option value.
    pub fn item_points(&self, value: u32) -> u32 {
        match self {
            ScoringRule::DirectSum => value,
            ScoringRule::ThresholdCount { threshold } => u32::from(value >= *threshold),
        }
    }

    pub fn min_total(&self, questions: &[Question]) -> u32 {
        questions
            .iter()
            .map(|q| self.item_points(q.min_value()))
            .sum()
    }

    pub fn max_total(&self, questions: &[Question]) -> u32 {
        questions
            .iter()
            .map(|q| self.item_points(q.max_value()))
            .sum()
    }
}

/// A named, inclusive range of total scores and the guidance that goes with it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub name: String,
    pub min: u32,
    pub max: u32,
    pub tone: SeverityTone,
    pub recommendations: Vec<String>,
}

impl SeverityBand {
    pub fn contains(&self, total: u32) -> bool {
        total >= self.min && total <= self.max
    }
}

/// An item whose answer alone raises the high-risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriticalItem {
    /// 1-based item number.
    pub number: usize,
    /// Any selected value strictly above this triggers the flag.
    pub above_value: u32,
}

/// When a result warrants immediate professional-support messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRule {
    pub score_at_least: u32,
    pub critical_item: Option<CriticalItem>,
}

pub(crate) fn questions(
    prompts: &[&str],
    negative: &[usize],
    scale: &[(&str, u32)],
) -> Vec<Question> {
    let options: Vec<ResponseOption> = scale
        .iter()
        .map(|(label, value)| ResponseOption {
            label: label.to_string(),
            value: *value,
        })
        .collect();

    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| Question {
            number: i + 1,
            prompt: prompt.to_string(),
            polarity: if negative.contains(&(i + 1)) {
                Polarity::Negative
            } else {
                Polarity::Positive
            },
            options: options.clone(),
        })
        .collect()
}

pub(crate) fn band(
    name: &str,
    min: u32,
    max: u32,
    tone: SeverityTone,
    recommendations: &[&str],
) -> SeverityBand {
    SeverityBand {
        name: name.to_string(),
        min,
        max,
        tone,
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
