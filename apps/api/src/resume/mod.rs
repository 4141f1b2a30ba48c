// Resume Generation: prompt building, one Gemini call, Markdown rendering.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod handlers;
pub mod prompts;
pub mod render;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::{ApiKey, ServiceErrorKind, TextGenerator};
use crate::resume::prompts::build_resume_prompt;
use crate::resume::render::{render_markdown, render_service_error};
use crate::view::View;

pub const MISSING_KEY_MESSAGE: &str = "Configuration Error: GEMINI_API_KEY not found. \
    Please set it in the environment or a .env file.";

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
}

/// What ended up in the output panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeOutcome {
    Rendered,
    RateLimited,
    Failed,
}

/// Generates a resume and renders it, or a classified error panel, into `view`.
///
/// Preconditions are checked in order (API key, then name and role) and fail
/// before the view or the generator is touched. Once the call is made the
/// loader is always hidden again, whatever the result.
pub async fn generate_resume<V: View + Send>(
    view: &mut V,
    request: &ResumeRequest,
    api_key: Option<&ApiKey>,
    generator: &dyn TextGenerator,
) -> Result<ResumeOutcome, AppError> {
    let api_key = api_key.ok_or_else(|| AppError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

    if request.full_name.trim().is_empty() || request.current_role.trim().is_empty() {
        return Err(AppError::Validation(
            "Please fill in at least Name and Role".to_string(),
        ));
    }

    view.set_loading(true);

    let prompt = build_resume_prompt(request);
    info!(
        "Generating resume for role '{}' ({} prompt chars)",
        request.current_role,
        prompt.len()
    );

    let outcome = match generator.generate(api_key, &prompt).await {
        Ok(markdown) => {
            view.replace(render_markdown(&markdown));
            ResumeOutcome::Rendered
        }
        Err(e) => {
            error!("Resume generation failed: {e}");
            view.replace(render_service_error(&e));
            match e.kind() {
                ServiceErrorKind::RateLimited => ResumeOutcome::RateLimited,
                ServiceErrorKind::Generic => ResumeOutcome::Failed,
            }
        }
    };

    view.set_loading(false);

    Ok(outcome)
}
