//! HTML for the resume output panel: the rendered resume or an error notice.

use pulldown_cmark::{html, Options, Parser};
use v_htmlescape::escape;

use crate::llm_client::{LlmError, ServiceErrorKind};

pub const RATE_LIMIT_NOTICE_HTML: &str = r#"<div style="background: rgba(245, 158, 11, 0.1); border: 1px solid #f59e0b; padding: 1.5rem; border-radius: 0.5rem; text-align: center;">
    <h3 style="color: #f59e0b; margin-bottom: 0.5rem;">⚠️ High Traffic (Rate Limit)</h3>
    <p style="color: #cbd5e1; margin-bottom: 1rem;">
        You have hit the free Usage Limit for the API.
        Google requires a cool-down period.
    </p>
    <p style="color: #fff; font-weight: bold;">Please wait approx 60 seconds and try again.</p>
</div>"#;

/// Converts generated Markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn render_error_panel(message: &str) -> String {
    format!(
        r#"<div style="color: #ef4444;">Error generating resume: {}. <br><br>Please check your API key/Internet and try again.</div>"#,
        escape(message)
    )
}

/// Picks the panel for a failed generation by its classified kind.
pub fn render_service_error(err: &LlmError) -> String {
    match err.kind() {
        ServiceErrorKind::RateLimited => RATE_LIMIT_NOTICE_HTML.to_string(),
        ServiceErrorKind::Generic => render_error_panel(&err.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_rendered() {
        assert_eq!(render_markdown("# Hello").trim(), "<h1>Hello</h1>");
    }

    #[test]
    fn test_lists_and_tables_are_rendered() {
        let html = render_markdown("- Rust\n- Go\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<li>Rust</li>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_rate_limited_error_uses_notice() {
        let err = LlmError::RateLimited {
            message: "Quota exceeded 429".to_string(),
        };
        let html = render_service_error(&err);
        assert!(html.contains("High Traffic (Rate Limit)"));
        assert!(html.contains("approx 60 seconds"));
        assert!(!html.contains("Error generating resume"));
    }

    #[test]
    fn test_generic_error_includes_message() {
        let html = render_service_error(&LlmError::MissingText);
        assert!(html.contains("Error generating resume: Response did not contain candidate text."));
        assert!(html.contains("check your API key/Internet"));
    }

    #[test]
    fn test_generic_api_error_shows_only_service_message() {
        let err = LlmError::Api {
            status: 400,
            message: "API key not valid".to_string(),
        };
        assert_eq!(
            render_service_error(&err),
            r#"<div style="color: #ef4444;">Error generating resume: API key not valid. <br><br>Please check your API key/Internet and try again.</div>"#
        );
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = render_error_panel("<script>");
        assert!(html.contains("&lt;script&gt;"));
    }
}
