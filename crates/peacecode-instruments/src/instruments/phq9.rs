use std::sync::LazyLock;

use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::severity::SeverityTone;

use super::{FREQUENCY_SCALE, TWO_WEEK_STEM};
use crate::Instrument;
use crate::scoring::{self, CriticalItem, Question, RiskRule, ScoringRule, SeverityBand};

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// Items rated 0–3, direct sum 0–27. Item 9 asks about self-harm.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn title(&self) -> &str {
        "Depression Screening"
    }

    fn description(&self) -> &str {
        "Patient Health Questionnaire for depression assessment"
    }

    fn estimated_duration(&self) -> &str {
        "5-7 minutes"
    }

    fn prompt_stem(&self) -> &str {
        TWO_WEEK_STEM
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            scoring::questions(
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself or that you are a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                    "Thoughts that you would be better off dead, or of hurting yourself",
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
                    "Minimal Depression",
                    0,
                    4,
                    SeverityTone::Minimal,
                    &[
                        "Your responses suggest minimal depressive symptoms",
                        "Continue with healthy lifestyle habits",
                        "Consider our wellness resources for maintaining good mental health",
                        "Monitor your mood and seek help if symptoms worsen",
                    ],
                ),
                scoring::band(
                    "Mild Depression",
                    5,
                    9,
                    SeverityTone::Mild,
                    &[
                        "Your responses suggest mild depressive symptoms",
                        "Consider speaking with a counselor for support and coping strategies",
                        "Engage in regular physical activity and maintain social connections",
                        "Use our AI support chat for immediate coping strategies",
                        "Explore our psychoeducational resources on depression management",
                    ],
                ),
                scoring::band(
                    "Moderate Depression",
                    10,
                    14,
                    SeverityTone::Moderate,
                    &[
                        "Your responses suggest moderate depressive symptoms",
                        "We strongly recommend scheduling an appointment with a mental health professional",
                        "Consider both counseling and possibly medication evaluation",
                        "Reach out to friends, family, or support groups",
                        "Use crisis support resources if you feel overwhelmed",
                    ],
                ),
                scoring::band(
                    "Moderately Severe Depression",
                    15,
                    19,
                    SeverityTone::Severe,
                    &[
                        "Your responses suggest moderately severe depressive symptoms",
                        "Please schedule an appointment with a mental health professional as soon as possible",
                        "Consider both psychotherapy and medication evaluation",
                        "Inform a trusted friend or family member about how you're feeling",
                        "If you have thoughts of self-harm, seek immediate help",
                    ],
                ),
                scoring::band(
                    "Severe Depression",
                    20,
                    27,
                    SeverityTone::Severe,
                    &[
                        "Your responses suggest severe depressive symptoms",
                        "Please seek immediate professional help",
                        "Contact a mental health crisis line if you're having thoughts of self-harm",
                        "Consider going to an emergency room if you feel unsafe",
                        "Inform someone you trust about your current state",
                        "Call 988 (Suicide & Crisis Lifeline) if needed",
                    ],
                ),
            ]
        });
        &BANDS
    }

    fn risk_rule(&self) -> RiskRule {
        RiskRule {
            score_at_least: 15,
            critical_item: Some(CriticalItem {
                number: 9,
                above_value: 0,
            }),
        }
    }

    fn risk_message(&self) -> &str {
        "Your responses indicate you may benefit from immediate professional support. \
         Please consider reaching out for help."
    }
}
