use axum::{extract::State, http::HeaderMap, Json};

use crate::auth::{login, logout};
use crate::errors::AppError;
use crate::inflight::{session_key, Operation};
use crate::state::AppState;
use crate::view::PageView;

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PageView>, AppError> {
    let _guard = state
        .in_flight
        .try_begin(session_key(&headers), Operation::Login)?;

    let mut view = PageView::new();
    login(&mut view, state.config.simulated_delay).await;
    Ok(Json(view))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout() -> Json<PageView> {
    let mut view = PageView::new();
    logout(&mut view);
    Json(view)
}
