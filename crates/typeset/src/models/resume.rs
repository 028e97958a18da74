//! The structured resume document model.
//!
//! Wire names are the upstream backend's camelCase JSON (`fullName`,
//! `technologiesUsed`, ...), so payloads stored by the service deserialize
//! directly. Every field defaults: an absent or null field becomes an empty
//! string, empty list, or `None`, and rendering degrades accordingly
//! instead of erroring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_information: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub achievements: Vec<AchievementEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    #[serde(rename = "linkedIn")]
    pub linkedin: Option<String>,
    #[serde(rename = "gitHub")]
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

/// Skills grouped by category. Each list keeps its input order and renders
/// as one comma-joined string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
    pub cloud: Vec<String>,
    pub other: Vec<String>,
}

impl Skills {
    /// True iff no category has any entry (the skills section's absence
    /// predicate).
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.frameworks.is_empty()
            && self.databases.is_empty()
            && self.tools.is_empty()
            && self.cloud.is_empty()
            && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    /// Free text; split into bullet items at render time.
    pub responsibility: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    /// Free text; normalized to exactly three points at render time.
    pub description: String,
    pub technologies_used: TechnologyList,
    pub github_link: Option<String>,
}

/// The upstream payloads carry `technologiesUsed` either as a JSON array
/// or as a single pre-joined string; both shapes are accepted and kept
/// until render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnologyList {
    List(Vec<String>),
    Text(String),
}

impl Default for TechnologyList {
    fn default() -> Self {
        TechnologyList::List(Vec::new())
    }
}

impl TechnologyList {
    /// Comma-joined display form (unescaped; escaping happens at splice).
    pub fn joined(&self) -> String {
        match self {
            TechnologyList::List(items) => items.join(", "),
            TechnologyList::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub title: String,
    pub issuing_organization: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementEntry {
    pub title: String,
    pub year: String,
}
