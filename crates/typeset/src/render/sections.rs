//! Per-section substitution passes. Each pass takes the working string and
//! returns the rewritten one; the orchestrator in `mod.rs` fixes the order.

use tracing::debug;

use crate::markers::{
    apply_optional_section, extract_loop_body, remove_section, replace_placeholder, splice_loop,
    unwrap_section,
};
use crate::models::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo,
    ProjectEntry, Skills,
};
use crate::normalize::{format_project_description, format_responsibility_items};
use crate::store::StyleKey;

/// Returns the value when non-blank, for optional-section predicates.
fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Link text shown next to contact icons: the URL without its scheme.
fn strip_scheme(link: &str) -> String {
    link.replace("https://", "").replace("http://", "")
}

/// Steps 1-3: atomic personal info placeholders, then the optional
/// contact/link sections, then the scheme-stripped display variants.
/// EMAIL and PHONE_NUMBER get both the placeholder pass and the section
/// pass: headers use the bare placeholder, footers wrap theirs in a
/// presence block.
pub(super) fn personal_info(doc: String, info: &PersonalInfo) -> String {
    let mut doc = replace_placeholder(&doc, "FULL_NAME", &info.full_name);
    doc = replace_placeholder(&doc, "EMAIL", &info.email);
    doc = replace_placeholder(&doc, "PHONE_NUMBER", &info.phone_number);
    doc = replace_placeholder(&doc, "LOCATION", &info.location);

    doc = apply_optional_section(&doc, "LINKEDIN", info.linkedin.as_deref());
    doc = apply_optional_section(&doc, "GITHUB", info.github.as_deref());
    doc = apply_optional_section(&doc, "PORTFOLIO", info.portfolio.as_deref());
    doc = apply_optional_section(&doc, "EMAIL", non_blank(&info.email));
    doc = apply_optional_section(&doc, "PHONE_NUMBER", non_blank(&info.phone_number));

    let linkedin_display = strip_scheme(info.linkedin.as_deref().unwrap_or(""));
    let github_display = strip_scheme(info.github.as_deref().unwrap_or(""));
    doc = replace_placeholder(&doc, "LINKEDIN_DISPLAY", &linkedin_display);
    replace_placeholder(&doc, "GITHUB_DISPLAY", &github_display)
}

/// Step 4: summary block, present iff non-blank.
pub(super) fn summary(doc: String, summary: Option<&str>) -> String {
    apply_optional_section(&doc, "SUMMARY", summary.and_then(non_blank))
}

/// Step 5: the skills section. The HAS_SKILLS gate is present iff any
/// category has an entry; each category then independently removes its
/// block or substitutes its comma-joined, escaped list.
pub(super) fn skills(doc: String, skills: &Skills) -> String {
    if skills.is_empty() {
        debug!("skills empty; removing section");
        return remove_section(&doc, "HAS_SKILLS");
    }

    let mut doc = unwrap_section(&doc, "HAS_SKILLS");
    doc = skill_category(doc, "SKILL_LANGUAGES", &skills.languages);
    doc = skill_category(doc, "SKILL_FRAMEWORKS", &skills.frameworks);
    doc = skill_category(doc, "SKILL_DATABASES", &skills.databases);
    doc = skill_category(doc, "SKILL_TOOLS", &skills.tools);
    doc = skill_category(doc, "SKILL_CLOUD", &skills.cloud);
    skill_category(doc, "SKILL_OTHER", &skills.other)
}

fn skill_category(doc: String, name: &str, entries: &[String]) -> String {
    if entries.is_empty() {
        return remove_section(&doc, name);
    }
    apply_optional_section(&doc, name, Some(&entries.join(", ")))
}

/// Step 6: experience entries. One rendered copy of the loop body per
/// entry, in input order; the responsibility free text becomes its own
/// item list (already escaped and formatted, so it is spliced raw).
pub(super) fn experience(doc: String, entries: &[ExperienceEntry]) -> String {
    if entries.is_empty() {
        debug!("no experience entries; removing section");
        return remove_section(&doc, "HAS_EXPERIENCE");
    }

    let doc = unwrap_section(&doc, "HAS_EXPERIENCE");
    let Some(body) = extract_loop_body(&doc, "EXPERIENCE").map(str::to_string) else {
        return doc;
    };

    let mut rendered = String::new();
    for entry in entries {
        let mut item = replace_placeholder(&body, "JOB_TITLE", &entry.job_title);
        item = replace_placeholder(&item, "COMPANY", &entry.company);
        item = replace_placeholder(&item, "LOCATION", &entry.location);
        item = replace_placeholder(&item, "DURATION", &entry.duration);
        item = item.replace(
            "{{RESPONSIBILITY}}",
            &format_responsibility_items(&entry.responsibility),
        );
        rendered.push_str(&item);
    }

    splice_loop(&doc, "EXPERIENCE", &rendered)
}

/// Step 7: project entries. Descriptions are normalized to a fixed point
/// count in the active style's leaf syntax; the github link is an optional
/// section resolved per entry, inside the already-extracted body.
pub(super) fn projects(doc: String, entries: &[ProjectEntry], style: StyleKey) -> String {
    if entries.is_empty() {
        debug!("no project entries; removing section");
        return remove_section(&doc, "HAS_PROJECTS");
    }

    let doc = unwrap_section(&doc, "HAS_PROJECTS");
    let Some(body) = extract_loop_body(&doc, "PROJECTS").map(str::to_string) else {
        return doc;
    };

    let mut rendered = String::new();
    for entry in entries {
        let mut item = replace_placeholder(&body, "PROJECT_TITLE", &entry.title);
        item = item.replace(
            "{{PROJECT_DESCRIPTION}}",
            &format_project_description(&entry.description, &entry.title, style),
        );
        item = replace_placeholder(&item, "TECHNOLOGIES", &entry.technologies_used.joined());
        item = apply_optional_section(&item, "GITHUB_LINK", entry.github_link.as_deref());
        rendered.push_str(&item);
    }

    splice_loop(&doc, "PROJECTS", &rendered)
}

/// Step 8: education entries, flat field substitution.
pub(super) fn education(doc: String, entries: &[EducationEntry]) -> String {
    if entries.is_empty() {
        return remove_section(&doc, "HAS_EDUCATION");
    }

    let doc = unwrap_section(&doc, "HAS_EDUCATION");
    let Some(body) = extract_loop_body(&doc, "EDUCATION").map(str::to_string) else {
        return doc;
    };

    let mut rendered = String::new();
    for entry in entries {
        let mut item = replace_placeholder(&body, "DEGREE", &entry.degree);
        item = replace_placeholder(&item, "UNIVERSITY", &entry.university);
        item = replace_placeholder(&item, "LOCATION", &entry.location);
        item = replace_placeholder(&item, "GRADUATION_YEAR", &entry.graduation_year);
        rendered.push_str(&item);
    }

    splice_loop(&doc, "EDUCATION", &rendered)
}

/// Step 9: certification entries, flat field substitution.
pub(super) fn certifications(doc: String, entries: &[CertificationEntry]) -> String {
    if entries.is_empty() {
        return remove_section(&doc, "HAS_CERTIFICATIONS");
    }

    let doc = unwrap_section(&doc, "HAS_CERTIFICATIONS");
    let Some(body) = extract_loop_body(&doc, "CERTIFICATIONS").map(str::to_string) else {
        return doc;
    };

    let mut rendered = String::new();
    for entry in entries {
        let mut item = replace_placeholder(&body, "CERT_TITLE", &entry.title);
        item = replace_placeholder(&item, "ISSUING_ORG", &entry.issuing_organization);
        item = replace_placeholder(&item, "CERT_YEAR", &entry.year);
        rendered.push_str(&item);
    }

    splice_loop(&doc, "CERTIFICATIONS", &rendered)
}

/// Step 10: achievement entries, flat field substitution.
pub(super) fn achievements(doc: String, entries: &[AchievementEntry]) -> String {
    if entries.is_empty() {
        return remove_section(&doc, "HAS_ACHIEVEMENTS");
    }

    let doc = unwrap_section(&doc, "HAS_ACHIEVEMENTS");
    let Some(body) = extract_loop_body(&doc, "ACHIEVEMENTS").map(str::to_string) else {
        return doc;
    };

    let mut rendered = String::new();
    for entry in entries {
        let mut item = replace_placeholder(&body, "ACH_TITLE", &entry.title);
        item = replace_placeholder(&item, "ACH_YEAR", &entry.year);
        rendered.push_str(&item);
    }

    splice_loop(&doc, "ACHIEVEMENTS", &rendered)
}
