use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use peacecode_core::models::instrument_id::InstrumentId;
use peacecode_core::models::severity::SeverityTone;
use peacecode_instruments::Instrument;
use peacecode_instruments::scoring::{Question, RiskRule, ScoringRule};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: InstrumentId,
    slug: String,
    name: String,
    title: String,
    description: String,
    estimated_duration: String,
    item_count: usize,
    max_score: u32,
}

#[derive(Serialize)]
pub struct BandSummary {
    name: String,
    min: u32,
    max: u32,
    tone: SeverityTone,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    #[serde(flatten)]
    summary: InstrumentSummary,
    prompt_stem: String,
    questions: Vec<Question>,
    scoring_rule: ScoringRule,
    bands: Vec<BandSummary>,
    risk_rule: RiskRule,
    risk_message: String,
}

fn summarize(instrument: &dyn Instrument) -> InstrumentSummary {
    InstrumentSummary {
        id: instrument.id(),
        slug: instrument.id().slug().to_string(),
        name: instrument.name().to_string(),
        title: instrument.title().to_string(),
        description: instrument.description().to_string(),
        estimated_duration: instrument.estimated_duration().to_string(),
        item_count: instrument.item_count(),
        max_score: instrument.max_score(),
    }
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    Json(state.registry.iter().map(summarize).collect())
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = state
        .registry
        .lookup(&id)
        .map_err(|_| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        summary: summarize(instrument),
        prompt_stem: instrument.prompt_stem().to_string(),
        questions: instrument.questions().to_vec(),
        scoring_rule: instrument.scoring_rule(),
        bands: instrument
            .bands()
            .iter()
            .map(|b| BandSummary {
                name: b.name.clone(),
                min: b.min,
                max: b.max,
                tone: b.tone,
            })
            .collect(),
        risk_rule: instrument.risk_rule(),
        risk_message: instrument.risk_message().to_string(),
    }))
}
