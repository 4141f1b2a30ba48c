// Job Search: mock posting generation and card rendering.
// Nothing here talks to a real job board; postings are synthesised from canned strings.

pub mod generator;
pub mod handlers;
pub mod render;

use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::generator::{generate_mock_jobs, JobPosting, RandomSource};
use crate::jobs::render::render_jobs;
use crate::view::View;

#[derive(Debug, Clone, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub location: String,
}

/// Validates the query, then after `delay` fills the view with freshly generated postings.
///
/// The view is untouched when validation fails. Accepted values are used verbatim.
pub async fn search_jobs<V, R>(
    view: &mut V,
    query: &JobQuery,
    rng: &mut R,
    delay: Duration,
) -> Result<Vec<JobPosting>, AppError>
where
    V: View + Send,
    R: RandomSource + Send,
{
    let (domain, location) = (query.domain.as_str(), query.location.as_str());

    if domain.trim().is_empty() || location.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter both domain and location".to_string(),
        ));
    }

    view.set_loading(true);
    view.clear();

    tokio::time::sleep(delay).await;

    let jobs = generate_mock_jobs(domain, location, rng);
    info!(
        "Generated {} mock postings for '{}' in '{}'",
        jobs.len(),
        domain,
        location
    );

    render_jobs(view, &jobs);
    view.set_loading(false);

    Ok(jobs)
}
