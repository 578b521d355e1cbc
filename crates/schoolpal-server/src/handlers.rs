//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use schoolpal_core::{ContactReceipt, ContactSubmission, SiteError, SubmissionSink};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub submissions_received: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: &SiteError) -> ApiError {
    let (status, code) = match err {
        SiteError::MissingField(_) | SiteError::TooLong { .. } | SiteError::InvalidEmail(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SUBMISSION")
        }
        SiteError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "SUBMISSION_ERROR"),
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        submissions_received: state.contacts.len(),
    })
}

/// Contact form endpoint
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactSubmission>,
) -> Result<Json<ContactReceipt>, ApiError> {
    state.contacts.submit(&payload).await.map(Json).map_err(|e| {
        tracing::warn!("Contact submission rejected: {}", e);
        api_error(&e)
    })
}
