use peacecode_core::models::history::ScreeningHistory;
use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::result::ScreeningResult;
use peacecode_core::models::severity::SeverityTone;

fn result(
    instrument: InstrumentId,
    total: u32,
    tone: SeverityTone,
    high_risk: bool,
    at: &str,
) -> ScreeningResult {
    ScreeningResult {
        instrument,
        total_score: total,
        max_score: 27,
        severity: format!("{tone:?}"),
        tone,
        recommendations: vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
            "fourth".to_string(),
        ],
        high_risk,
        completed_at: at.parse().unwrap(),
    }
}

#[test]
fn empty_history_has_empty_summary() {
    let history = ScreeningHistory::new();
    assert!(history.is_empty());
    let summary = history.summary();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.high_risk, 0);
    assert!(summary.by_instrument.is_empty());
    assert!(summary.by_tone.is_empty());
}

#[test]
fn newest_first_orders_by_completion_time() {
    let phq = result(InstrumentId::Phq9, 3, SeverityTone::Minimal, false, "2026-03-01T10:00:00Z");
    let gad = result(InstrumentId::Gad7, 12, SeverityTone::Moderate, false, "2026-03-05T10:00:00Z");
    let ghq = result(InstrumentId::Ghq12, 8, SeverityTone::Severe, true, "2026-03-03T10:00:00Z");
    let history = ScreeningHistory::new().with(phq).with(gad).with(ghq);

    let order: Vec<_> = history.newest_first().iter().map(|r| r.instrument).collect();
    assert_eq!(order, vec![InstrumentId::Gad7, InstrumentId::Ghq12, InstrumentId::Phq9]);

    let recorded: Vec<_> = history.iter().map(|r| r.instrument).collect();
    assert_eq!(recorded, vec![InstrumentId::Phq9, InstrumentId::Gad7, InstrumentId::Ghq12]);
}

#[test]
fn latest_picks_most_recent_for_instrument() {
    let mut history = ScreeningHistory::new();
    for (instrument, total, tone, high_risk, at) in [
        (InstrumentId::Phq9, 16, SeverityTone::Severe, true, "2026-04-10T09:00:00Z"),
        (InstrumentId::Phq9, 6, SeverityTone::Mild, false, "2026-04-20T09:00:00Z"),
        (InstrumentId::Gad7, 2, SeverityTone::Minimal, false, "2026-04-25T09:00:00Z"),
    ] {
        history.record(result(instrument, total, tone, high_risk, at));
    }

    let latest = history.latest(InstrumentId::Phq9).unwrap();
    assert_eq!(latest.total_score, 6);
    assert!(history.latest(InstrumentId::Ghq12).is_none());
}

#[test]
fn summary_counts_instruments_tones_and_risk() {
    let history = ScreeningHistory::from(vec![
        result(InstrumentId::Phq9, 21, SeverityTone::Severe, true, "2026-05-01T00:00:00Z"),
        result(InstrumentId::Phq9, 1, SeverityTone::Minimal, true, "2026-05-02T00:00:00Z"),
        result(InstrumentId::Gad7, 7, SeverityTone::Mild, false, "2026-05-03T00:00:00Z"),
    ]);

    let summary = history.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.high_risk, 2);
    assert_eq!(summary.by_instrument[&InstrumentId::Phq9], 2);
    assert_eq!(summary.by_instrument[&InstrumentId::Gad7], 1);
    assert!(!summary.by_instrument.contains_key(&InstrumentId::Ghq12));
    assert_eq!(summary.by_tone[&SeverityTone::Severe], 1);
    assert_eq!(summary.by_tone[&SeverityTone::Minimal], 1);
    assert_eq!(summary.by_tone[&SeverityTone::Mild], 1);
}

#[test]
fn history_serializes_as_plain_array() {
    let history = ScreeningHistory::new()
        .with(result(InstrumentId::Gad7, 21, SeverityTone::Severe, true, "2026-06-01T12:00:00Z"));

    let json = history.to_json().unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains("\"instrument\":\"GAD-7\""));
    assert!(json.contains("\"tone\":\"severe\""));

    let restored = ScreeningHistory::from_json(&json).unwrap();
    assert_eq!(restored, history);
}

#[test]
fn headline_recommendations_caps_at_three() {
    let r = result(InstrumentId::Phq9, 0, SeverityTone::Minimal, false, "2026-01-01T00:00:00Z");
    assert_eq!(r.headline_recommendations(), &["first", "second", "third"]);

    let short = ScreeningResult {
        recommendations: vec!["only".to_string()],
        ..r
    };
    assert_eq!(short.headline_recommendations(), &["only"]);
}
