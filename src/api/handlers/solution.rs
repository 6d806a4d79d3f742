/// Solution and baseline handlers
use axum::extract::State;
use axum::Json;
use tracing::info;
use tracing::warn;

use super::bad_request;
use super::ApiError;
use super::AppState;
use crate::api::types::*;

/// Grounded answer, optionally with the baseline alongside (POST /api/solution)
pub async fn solution(
    State(state): State<AppState>,
    Json(req): Json<SolutionRequest>,
) -> Result<Json<ApiResponse<SolutionResponse>>, ApiError> {
    info!("POST /api/solution: {}", req.query);

    if req.query.trim().is_empty() {
        return Err(bad_request("query must not be empty"));
    }

    let result = state.engine.get_solution(&req.query).await;
    if result.is_failure() {
        warn!("Solution request failed: {}", result.answer);
    }

    let baseline = if req.compare {
        Some(state.engine.get_baseline_response(&req.query).await)
    } else {
        None
    };

    Ok(Json(ApiResponse::success(SolutionResponse::new(
        result, baseline,
    ))))
}

/// Ungrounded answer (POST /api/baseline)
pub async fn baseline(
    State(state): State<AppState>,
    Json(req): Json<BaselineRequest>,
) -> Result<Json<ApiResponse<BaselineResponse>>, ApiError> {
    info!("POST /api/baseline: {}", req.query);

    if req.query.trim().is_empty() {
        return Err(bad_request("query must not be empty"));
    }

    let answer = state.engine.get_baseline_response(&req.query).await;
    Ok(Json(ApiResponse::success(BaselineResponse { answer })))
}
