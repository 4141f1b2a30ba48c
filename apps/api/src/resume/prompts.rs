// Prompt text for resume generation. Field values are embedded verbatim.

use crate::resume::ResumeRequest;

/// Sections the generated resume must contain, in order.
pub const RESUME_SECTIONS: &[&str] = &[
    "Professional Summary",
    "Work Experience",
    "Skills",
    "Education (placeholder)",
];

pub fn build_resume_prompt(request: &ResumeRequest) -> String {
    let sections = match RESUME_SECTIONS.split_last() {
        Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
        None => String::new(),
    };

    format!(
        "Create a professional ATS-friendly resume in Markdown format for:\n\
         Name: {name}\n\
         Current Role: {role}\n\
         Skills: {skills}\n\
         Experience Summary: {experience}\n\
         \n\
         Please structure it with sections: {sections}. \
         Make it sound professional and sleek.",
        name = request.full_name,
        role = request.current_role,
        skills = request.skills,
        experience = request.experience,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_fields_and_sections() {
        let request = ResumeRequest {
            full_name: "Ada Lovelace".to_string(),
            current_role: "Analyst".to_string(),
            skills: "Rust, <b>math</b>".to_string(),
            experience: "Wrote the first program".to_string(),
        };

        let prompt = build_resume_prompt(&request);

        assert!(prompt.contains("ATS-friendly resume in Markdown"));
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Current Role: Analyst"));
        assert!(prompt.contains("Skills: Rust, <b>math</b>"));
        assert!(prompt.contains("Experience Summary: Wrote the first program"));
        assert!(prompt.contains(
            "Professional Summary, Work Experience, Skills, and Education (placeholder)"
        ));
    }
}
