//! Resume rendering — the fixed substitution pipeline.
//!
//! Flow: load template → personal info placeholders → optional contact and
//! link sections → summary → skills → experience → projects → education →
//! certifications → achievements → languages removal → sanitize.
//!
//! Each pass is pure on the working string; the order is fixed and every
//! wired name is processed exactly once. The only failure is a template
//! lookup miss; data problems degrade (sections removed, placeholders
//! synthesized), they never abort a render.

mod sections;

use tracing::debug;

use crate::errors::RenderError;
use crate::markers::remove_section;
use crate::models::Resume;
use crate::sanitize::sanitize;
use crate::store::{StyleKey, TemplateSource};

/// Renders a resume into LaTeX source for the given style.
///
/// Pure and synchronous: the template and the resume are read-only, the
/// working string is owned by this call, and concurrent renders never
/// contend. The output is guaranteed free of `{{` marker syntax.
pub fn render_resume(
    source: &dyn TemplateSource,
    style: StyleKey,
    resume: &Resume,
) -> Result<String, RenderError> {
    let template = source.load(style)?;
    debug!(style = %style, template_bytes = template.len(), "rendering resume");

    // Step 1-3: personal info placeholders, optional contact/link
    // sections, scheme-stripped display links
    let mut doc = sections::personal_info(template, &resume.personal_information);

    // Step 4: summary (present iff non-blank)
    doc = sections::summary(doc, resume.summary.as_deref());

    // Step 5: skills gate + per-category joins
    doc = sections::skills(doc, &resume.skills);

    // Step 6: experience loop with responsibility splitting
    doc = sections::experience(doc, &resume.experience);

    // Step 7: projects loop with description normalization
    doc = sections::projects(doc, &resume.projects, style);

    // Steps 8-10: flat entry loops
    doc = sections::education(doc, &resume.education);
    doc = sections::certifications(doc, &resume.certifications);
    doc = sections::achievements(doc, &resume.achievements);

    // Step 11: spoken-language proficiency is never rendered
    doc = remove_section(&doc, "HAS_LANGUAGES");

    // Step 12: defensive sweep; no marker syntax may survive
    let output = sanitize(&doc);
    debug!(style = %style, output_bytes = output.len(), "render complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, PersonalInfo, ProjectEntry, Skills};
    use crate::store::EmbeddedTemplates;

    fn minimal_resume() -> Resume {
        Resume {
            personal_information: PersonalInfo {
                full_name: "Grace Hopper".to_string(),
                email: "grace@navy.mil".to_string(),
                phone_number: "+1 555 0100".to_string(),
                location: "Arlington, VA".to_string(),
                linkedin: Some("https://linkedin.com/in/grace".to_string()),
                github: None,
                portfolio: None,
            },
            summary: Some("Compiler pioneer.".to_string()),
            skills: Skills {
                languages: vec!["COBOL".to_string(), "FLOW-MATIC".to_string()],
                ..Skills::default()
            },
            experience: vec![ExperienceEntry {
                job_title: "Rear Admiral".to_string(),
                company: "US Navy".to_string(),
                location: "Arlington, VA".to_string(),
                duration: "1943 - 1986".to_string(),
                responsibility: "- Invented the compiler\n- Coined 'debugging'".to_string(),
            }],
            projects: vec![ProjectEntry {
                title: "UNIVAC I".to_string(),
                description: "did one thing".to_string(),
                ..ProjectEntry::default()
            }],
            ..Resume::default()
        }
    }

    #[test]
    fn test_render_every_style_is_marker_free() {
        let resume = minimal_resume();
        for style in StyleKey::ALL {
            let out = render_resume(&EmbeddedTemplates, style, &resume).unwrap();
            assert!(
                !out.contains("{{"),
                "{style} output leaked marker syntax"
            );
            assert!(out.contains("Grace Hopper"), "{style} output lost the name");
        }
    }

    #[test]
    fn test_render_default_resume_is_marker_free() {
        // The empty model exercises every removal path at once.
        for style in StyleKey::ALL {
            let out = render_resume(&EmbeddedTemplates, style, &Resume::default()).unwrap();
            assert!(!out.contains("{{"), "{style} empty render leaked markers");
        }
    }

    #[test]
    fn test_empty_skills_removes_section_without_residue() {
        let mut resume = minimal_resume();
        resume.skills = Skills::default();
        let out = render_resume(&EmbeddedTemplates, StyleKey::Professional, &resume).unwrap();
        assert!(!out.contains("HAS_SKILLS"));
        assert!(!out.contains("{{#"));
        assert!(!out.contains("{{/"));
    }

    #[test]
    fn test_skill_categories_join_with_commas() {
        let resume = minimal_resume();
        let out = render_resume(&EmbeddedTemplates, StyleKey::Professional, &resume).unwrap();
        assert!(out.contains("COBOL, FLOW-MATIC"));
    }

    #[test]
    fn test_languages_section_always_removed() {
        let resume = minimal_resume();
        for style in StyleKey::ALL {
            let out = render_resume(&EmbeddedTemplates, style, &resume).unwrap();
            assert!(!out.contains("HAS_LANGUAGES"), "{style} kept the languages block");
        }
    }

    #[test]
    fn test_responsibility_items_rendered() {
        let resume = minimal_resume();
        let out = render_resume(&EmbeddedTemplates, StyleKey::Professional, &resume).unwrap();
        assert!(out.contains("\\resumeItem{Invented the compiler}"));
        assert!(out.contains("\\resumeItem{Coined 'debugging'}"));
    }

    #[test]
    fn test_short_project_description_padded_with_title() {
        let resume = minimal_resume();
        let out = render_resume(&EmbeddedTemplates, StyleKey::Professional, &resume).unwrap();
        assert!(out.contains("did one thing"));
        assert!(
            out.contains("across UNIVAC I"),
            "padding placeholders must reference the project title"
        );
    }
}
