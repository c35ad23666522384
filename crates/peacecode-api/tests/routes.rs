use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use peacecode_api::config::ApiConfig;
use peacecode_api::state::AppState;
use peacecode_instruments::registry::Registry;

fn app() -> Router {
    let state = AppState::new(Registry::standard().unwrap());
    peacecode_api::app(state, ApiConfig::default().cors_layer())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_standard_instruments() {
    let (status, body) = get("/instruments").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["id"], "PHQ-9");
    assert_eq!(list[0]["slug"], "phq9");
    assert_eq!(list[0]["item_count"], 9);
    assert_eq!(list[0]["max_score"], 27);
    assert_eq!(list[2]["id"], "GHQ-12");
    assert_eq!(list[2]["max_score"], 12);
}

#[tokio::test]
async fn instrument_detail_by_slug() {
    let (status, body) = get("/instruments/gad7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "GAD-7");
    assert_eq!(body["questions"].as_array().unwrap().len(), 7);
    assert_eq!(body["questions"][0]["options"][3]["label"], "Nearly every day");
    assert_eq!(body["scoring_rule"]["type"], "direct_sum");
    assert_eq!(body["bands"][3]["name"], "Severe Anxiety");
    assert_eq!(body["bands"][3]["tone"], "severe");
    assert_eq!(body["risk_rule"]["score_at_least"], 15);
    assert_eq!(
        body["risk_message"],
        "Your anxiety levels suggest you would benefit from professional support and intervention."
    );
}

#[tokio::test]
async fn unknown_instrument_detail_is_404() {
    let (status, body) = get("/instruments/bdi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "instrument not found: bdi");
}

#[tokio::test]
async fn scores_phq9_with_crisis_override() {
    let (status, body) = post(
        "/screenings",
        json!({ "instrument": "PHQ-9", "selections": [0, 0, 0, 0, 0, 0, 0, 0, 1] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instrument"], "PHQ-9");
    assert_eq!(body["total_score"], 1);
    assert_eq!(body["severity"], "Minimal Depression");
    assert_eq!(body["high_risk"], true);
    assert!(body["completed_at"].is_string());
}

#[tokio::test]
async fn short_response_set_is_422() {
    let (status, body) = post(
        "/screenings",
        json!({ "instrument": "phq9", "selections": [0, 0, 0, 0, 0, 0, 0, 0] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "PHQ-9 expects 9 responses, got 8");
}

#[tokio::test]
async fn out_of_range_option_is_422() {
    let (status, _) = post(
        "/screenings",
        json!({ "instrument": "GAD-7", "selections": [0, 0, 0, 4, 0, 0, 0] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_instrument_score_is_404() {
    let (status, body) = post(
        "/screenings",
        json!({ "instrument": "K10", "selections": [0, 0] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown instrument: K10");
}

#[tokio::test]
async fn summarizes_caller_history() {
    let (_, older) = post(
        "/screenings",
        json!({ "instrument": "GAD-7", "selections": [3, 3, 3, 3, 3, 3, 3] }),
    )
    .await;
    let mut newer = older.clone();
    newer["instrument"] = json!("GHQ-12");
    newer["tone"] = json!("minimal");
    newer["high_risk"] = json!(false);
    newer["completed_at"] = json!("2099-01-01T00:00:00Z");

    let (status, body) = post("/screenings/summary", json!([older, newer])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total"], 2);
    assert_eq!(body["summary"]["high_risk"], 1);
    assert_eq!(body["summary"]["by_instrument"]["GAD-7"], 1);
    assert_eq!(body["summary"]["by_tone"]["severe"], 1);
    assert_eq!(body["results"][0]["instrument"], "GHQ-12");
    assert_eq!(body["results"][1]["instrument"], "GAD-7");
}
