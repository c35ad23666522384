use std::sync::LazyLock;

use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::severity::SeverityTone;

use crate::Instrument;
use crate::scoring::{self, Question, RiskRule, ScoringRule, SeverityBand};

/// GHQ-12: General Health Questionnaire, twelve-item version.
/// Items rated on a 4-point "compared to usual" scale and scored 0/0/1/1
/// (GHQ method), total 0–12.
pub struct Ghq12;

/// 1-based items worded in terms of distress rather than wellbeing.
const NEGATIVE_ITEMS: [usize; 6] = [2, 5, 6, 9, 10, 11];

impl Instrument for Ghq12 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Ghq12
    }

    fn name(&self) -> &str {
        "GHQ-12"
    }

    fn title(&self) -> &str {
        "General Health Questionnaire"
    }

    fn description(&self) -> &str {
        "Overall psychological well-being assessment"
    }

    fn estimated_duration(&self) -> &str {
        "4-6 minutes"
    }

    fn prompt_stem(&self) -> &str {
        "We should like to know how your health has been in general over the past few weeks. \
         Have you recently:"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            scoring::questions(
                &[
                    "Been able to concentrate on whatever you're doing?",
                    "Lost much sleep over worry?",
                    "Felt that you were playing a useful part in things?",
                    "Felt capable of making decisions about things?",
                    "Felt constantly under strain?",
                    "Felt you couldn't overcome your difficulties?",
                    "Been able to enjoy your normal day-to-day activities?",
                    "Been able to face up to problems?",
                    "Been feeling unhappy or depressed?",
                    "Been losing confidence in yourself?",
                    "Been thinking of yourself as a worthless person?",
                    "Been feeling reasonably happy, all things considered?",
                ],
                &NEGATIVE_ITEMS,
                &[
                    ("Better than usual", 0),
                    ("Same as usual", 1),
                    ("Less than usual", 2),
                    ("Much less than usual", 3),
                ],
            )
        });
        &QUESTIONS
    }

    // Negative items are not reversed: both polarities score a point for
    // "Less than usual" or worse. Kept as-is until checked against the
    // published scoring guide.
    fn scoring_rule(&self) -> ScoringRule {
        ScoringRule::ThresholdCount { threshold: 2 }
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                scoring::band(
                    "Good Mental Health",
                    0,
                    2,
                    SeverityTone::Minimal,
                    &[
                        "Your responses suggest good overall mental health",
                        "Continue with your current self-care practices",
                        "Consider our wellness resources to maintain good mental health",
                        "Stay connected with supportive relationships",
                    ],
                ),
                scoring::band(
                    "Mild Distress",
                    3,
                    4,
                    SeverityTone::Mild,
                    &[
                        "Your responses suggest mild psychological distress",
                        "Consider stress management techniques and self-care",
                        "Use our relaxation resources and mindfulness exercises",
                        "Monitor your mental health and seek support if needed",
                        "Maintain healthy lifestyle habits",
                    ],
                ),
                scoring::band(
                    "Moderate Distress",
                    5,
                    6,
                    SeverityTone::Moderate,
                    &[
                        "Your responses suggest moderate psychological distress",
                        "We recommend speaking with a mental health professional",
                        "Consider counseling to develop coping strategies",
                        "Use our AI support for immediate assistance",
                        "Engage in stress-reducing activities and social support",
                    ],
                ),
                scoring::band(
                    "Severe Distress",
                    7,
                    12,
                    SeverityTone::Severe,
                    &[
                        "Your responses suggest significant psychological distress",
                        "Please seek professional mental health support promptly",
                        "Consider both counseling and possible medical evaluation",
                        "Reach out to trusted friends, family, or support services",
                        "Use crisis resources if you feel overwhelmed",
                        "Contact emergency services if you feel unsafe",
                    ],
                ),
            ]
        });
        &BANDS
    }

    fn risk_rule(&self) -> RiskRule {
        RiskRule {
            score_at_least: 7,
            critical_item: None,
        }
    }

    fn risk_message(&self) -> &str {
        "Your responses indicate significant distress. Please consider seeking professional support."
    }
}
