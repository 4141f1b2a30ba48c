//! Axum route handlers for the Job Search API.

use axum::{extract::State, http::HeaderMap, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::errors::AppError;
use crate::inflight::{session_key, Operation};
use crate::jobs::generator::JobPosting;
use crate::jobs::{search_jobs, JobQuery};
use crate::state::AppState;
use crate::view::PageView;

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub count: usize,
    pub postings: Vec<JobPosting>,
    pub view: PageView,
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(query): Json<JobQuery>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let _guard = state
        .in_flight
        .try_begin(session_key(&headers), Operation::JobSearch)?;

    let mut rng = StdRng::try_from_os_rng()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("OS entropy unavailable: {e}")))?;
    let mut view = PageView::new();

    let postings = search_jobs(&mut view, &query, &mut rng, state.config.simulated_delay).await?;

    Ok(Json(JobSearchResponse {
        count: postings.len(),
        postings,
        view,
    }))
}
