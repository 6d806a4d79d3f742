//! API request and response types

use serde::Deserialize;
use serde::Serialize;

use crate::models::Passage;
use crate::models::SolutionResult;
use crate::models::SolutionStatus;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Grounded answer request
#[derive(Debug, Deserialize)]
pub struct SolutionRequest {
    pub query: String,
    /// Also produce the ungrounded baseline answer
    #[serde(default)]
    pub compare: bool,
}

#[derive(Debug, Serialize)]
pub struct SolutionResponse {
    pub answer: String,
    pub status: SolutionStatus,
    pub sources: Vec<Passage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
}

impl SolutionResponse {
    pub fn new(result: SolutionResult, baseline: Option<String>) -> Self {
        Self {
            answer: result.answer,
            status: result.status,
            sources: result.sources,
            baseline,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BaselineRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct BaselineResponse {
    pub answer: String,
}
