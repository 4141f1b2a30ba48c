//! Axum route handlers for the Resume API.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::inflight::{session_key, Operation};
use crate::resume::{generate_resume, ResumeOutcome, ResumeRequest};
use crate::state::AppState;
use crate::view::PageView;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub outcome: ResumeOutcome,
    pub view: PageView,
}

/// POST /api/v1/resumes/generate
///
/// Service failures still answer 200; `outcome` tells the client which panel was rendered.
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let _guard = state
        .in_flight
        .try_begin(session_key(&headers), Operation::ResumeGeneration)?;

    let mut view = PageView::new();
    let outcome = generate_resume(
        &mut view,
        &request,
        state.config.gemini_api_key.as_ref(),
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(ResumeResponse { outcome, view }))
}
