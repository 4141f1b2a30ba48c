pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{auth, jobs, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mock auth
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route("/api/v1/auth/logout", post(auth::handlers::handle_logout))
        // Job search
        .route("/api/v1/jobs/search", post(jobs::handlers::handle_search))
        // Resume generation
        .route(
            "/api/v1/resumes/generate",
            post(resume::handlers::handle_generate),
        )
        .with_state(state)
}
