use std::sync::LazyLock;

use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::severity::SeverityTone;

use super::{FREQUENCY_SCALE, TWO_WEEK_STEM};
use crate::Instrument;
use crate::scoring::{self, Question, RiskRule, ScoringRule, SeverityBand};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3, direct sum 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn title(&self) -> &str {
        "Anxiety Assessment"
    }

    fn description(&self) -> &str {
        "Generalized Anxiety Disorder scale"
    }

    fn estimated_duration(&self) -> &str {
        "3-5 minutes"
    }

    fn prompt_stem(&self) -> &str {
        TWO_WEEK_STEM
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            scoring::questions(
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ],
                &[],
                &FREQUENCY_SCALE,
            )
        });
        &QUESTIONS
    }

    fn scoring_rule(&self) -> ScoringRule {
        ScoringRule::DirectSum
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                scoring::band(
                    "Minimal Anxiety",
                    0,
                    4,
                    SeverityTone::Minimal,
                    &[
                        "Your responses suggest minimal anxiety symptoms",
                        "Continue with healthy stress management practices",
                        "Consider our relaxation resources for maintaining calm",
                        "Monitor your anxiety levels and seek help if symptoms increase",
                    ],
                ),
                scoring::band(
                    "Mild Anxiety",
                    5,
                    9,
                    SeverityTone::Mild,
                    &[
                        "Your responses suggest mild anxiety symptoms",
                        "Consider learning anxiety management techniques",
                        "Try our guided relaxation audio resources",
                        "Speak with a counselor if symptoms interfere with daily activities",
                        "Practice regular exercise and mindfulness",
                    ],
                ),
                scoring::band(
                    "Moderate Anxiety",
                    10,
                    14,
                    SeverityTone::Moderate,
                    &[
                        "Your responses suggest moderate anxiety symptoms",
                        "We recommend scheduling an appointment with a mental health professional",
                        "Consider both counseling and anxiety management strategies",
                        "Use our AI support for immediate coping techniques",
                        "Practice deep breathing and grounding exercises",
                    ],
                ),
                scoring::band(
                    "Severe Anxiety",
                    15,
                    21,
                    SeverityTone::Severe,
                    &[
                        "Your responses suggest severe anxiety symptoms",
                        "Please seek professional help as soon as possible",
                        "Consider both therapy and possible medication evaluation",
                        "Use crisis support resources if anxiety feels overwhelming",
                        "Inform a trusted person about your anxiety levels",
                        "Contact emergency services if you feel unsafe",
                    ],
                ),
            ]
        });
        &BANDS
    }

    fn risk_rule(&self) -> RiskRule {
        RiskRule {
            score_at_least: 15,
            critical_item: None,
        }
    }

    fn risk_message(&self) -> &str {
        "Your anxiety levels suggest you would benefit from professional support and intervention."
    }
}
