use v_htmlescape::escape;

use crate::jobs::generator::JobPosting;
use crate::view::View;

pub const NO_RESULTS_HTML: &str = r#"<p style="text-align: center; grid-column: 1/-1;">No jobs found. Try different keywords.</p>"#;

/// Renders one card per posting into `view`, or a single "no results" message.
pub fn render_jobs<V: View + ?Sized>(view: &mut V, jobs: &[JobPosting]) {
    if jobs.is_empty() {
        view.replace(NO_RESULTS_HTML.to_string());
        return;
    }

    for job in jobs {
        view.append(render_job_card(job));
    }
}

pub fn render_job_card(job: &JobPosting) -> String {
    format!(
        r#"<div class="job-card">
    <h3 class="job-title">{title}</h3>
    <div class="job-company">{company} • {employment_type}</div>
    <div class="job-details">
        📍 {location}<br>
        💰 {salary}
    </div>
    <p style="margin-bottom: 1rem; color: #cbd5e1; font-size: 0.9rem">{description}</p>
    <button class="btn" style="width: 100%; padding: 0.5rem;">Apply Now</button>
</div>"#,
        title = escape(&job.title),
        company = escape(&job.company),
        employment_type = escape(&job.employment_type),
        location = escape(&job.location),
        salary = escape(&job.salary),
        description = escape(&job.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PageView, ViewEvent};

    fn posting(location: &str) -> JobPosting {
        JobPosting {
            title: "Senior Rust".to_string(),
            company: "TechCorp".to_string(),
            location: location.to_string(),
            employment_type: "Remote".to_string(),
            description: "We are looking for a talented Rust".to_string(),
            salary: "$90k - $150k".to_string(),
        }
    }

    #[test]
    fn test_empty_list_shows_no_results_message() {
        let mut view = PageView::new();
        render_jobs(&mut view, &[]);
        assert_eq!(view.html(), NO_RESULTS_HTML);
        assert!(matches!(view.events(), [ViewEvent::Replaced(_)]));
    }

    #[test]
    fn test_card_contains_every_field_and_apply_button() {
        let card = render_job_card(&posting("Lisbon"));
        for needle in ["Senior Rust", "TechCorp • Remote", "Lisbon", "$90k - $150k", "Apply Now"] {
            assert!(card.contains(needle), "card missing {needle}");
        }
    }

    #[test]
    fn test_card_escapes_user_supplied_location() {
        let card = render_job_card(&posting("<img src=x onerror=alert(1)>"));
        assert!(!card.contains("<img"));
        assert!(card.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_card_escapes_quotes_and_ampersands() {
        let card = render_job_card(&posting(r#"Smith "&" Sons"#));
        assert!(card.contains("Smith &quot;&amp;&quot; Sons"));
    }

    #[test]
    fn test_one_append_per_posting() {
        let mut view = PageView::new();
        render_jobs(&mut view, &[posting("A"), posting("B"), posting("C")]);
        assert_eq!(view.events().len(), 3);
    }
}
