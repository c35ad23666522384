//! peacecode-api
//!
//! Stateless HTTP front for the screening engine. Serves instrument
//! definitions and scores completed response sets; stores nothing.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use state::AppState;

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Scoring
        .route("/screenings", post(routes::screenings::score_screening))
        .route(
            "/screenings/summary",
            post(routes::screenings::summarize_history),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
