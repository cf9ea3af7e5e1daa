// =============================================================================
// REST API Endpoints (Axum 0.7)
// =============================================================================
//
// All endpoints live under `/api/v1/` and answer with JSON:
//
//   GET /api/v1/health     liveness + counters
//   GET /api/v1/dashboard  candles, analytics record and ATR
//
// CORS is configured permissively so the dashboard front-end can be served
// from a different origin.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::app_state::AppState;

// =============================================================================
// Router construction
// =============================================================================

/// Build the REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/dashboard", get(dashboard))
        .layer(cors)
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    requests_served: u64,
    started_at: i64,
    server_time: i64,
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let resp = HealthResponse {
        status: "ok",
        requests_served: state.requests_served(),
        started_at: state.started_at,
        server_time: chrono::Utc::now().timestamp_millis(),
    };
    Json(resp)
}

// =============================================================================
// Dashboard
// =============================================================================

async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let service = state.dashboard.clone();

    // Price sources may block on disk; keep them off the async workers.
    let result = tokio::task::spawn_blocking(move || service.snapshot()).await;

    match result {
        Ok(Ok(snapshot)) => {
            let served = state.record_request();
            info!(
                coin_id = %snapshot.coin_id,
                candles = snapshot.candlestick_data.len(),
                served,
                "dashboard snapshot served"
            );
            Json(snapshot).into_response()
        }
        Ok(Err(e)) => {
            let message = format!("{e:#}");
            error!(error = %message, "dashboard snapshot failed");
            error_response(StatusCode::BAD_GATEWAY, message)
        }
        Err(e) => {
            error!(error = %e, "dashboard task panicked");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "dashboard computation aborted".to_string(),
            )
        }
    }
}
