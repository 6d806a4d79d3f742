/// API request handlers
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::rag::NocEngine;

pub mod solution;

pub use solution::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<NocEngine>,
}

impl AppState {
    pub fn new(engine: Arc<NocEngine>) -> Self {
        Self { engine }
    }
}

/// Rejection carrying a JSON error body
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(message.to_string())),
    )
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
