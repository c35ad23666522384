use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use peacecode_core::models::history::{HistorySummary, ScreeningHistory};
use peacecode_core::models::result::ScreeningResult;
use peacecode_instruments::engine;

use crate::error::ApiError;
use crate::state::AppState;

/// A completed response set as posted by the front end. The instrument is
/// taken as a string so unknown names surface as 404 rather than a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub instrument: String,
    pub selections: Vec<usize>,
}

#[derive(Serialize)]
pub struct HistoryReport {
    summary: HistorySummary,
    /// Most recent first.
    results: Vec<ScreeningResult>,
}

pub async fn score_screening(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScreeningResult>, ApiError> {
    let instrument = state.registry.lookup(&request.instrument)?;
    let result = engine::score(instrument, &request.selections)?;

    tracing::info!(
        instrument = %result.instrument,
        tone = ?result.tone,
        high_risk = result.high_risk,
        "screening scored"
    );
    if result.high_risk {
        tracing::warn!(instrument = %result.instrument, "high-risk screening result");
    }

    Ok(Json(result))
}

pub async fn summarize_history(Json(history): Json<ScreeningHistory>) -> Json<HistoryReport> {
    Json(HistoryReport {
        summary: history.summary(),
        results: history.newest_first().into_iter().cloned().collect(),
    })
}
