//! Template styles and the template lookup contract.
//!
//! Template text is immutable once loaded and safe to cache for the
//! process lifetime. [`EmbeddedTemplates`] bakes the four shipped styles in
//! at compile time, which makes it the load-once cache: static data,
//! constructed for free, shared across threads without locks. Callers with
//! their own template storage implement [`TemplateSource`] instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RenderError;

/// A named template variant. Selects both the raw LaTeX text and the
/// per-style leaf formatting used for project descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKey {
    Modern,
    #[default]
    Professional,
    Ats,
    Creative,
}

impl StyleKey {
    pub const ALL: [StyleKey; 4] = [
        StyleKey::Modern,
        StyleKey::Professional,
        StyleKey::Ats,
        StyleKey::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::Modern => "modern",
            StyleKey::Professional => "professional",
            StyleKey::Ats => "ats",
            StyleKey::Creative => "creative",
        }
    }

    /// One-line description shown to users picking a style.
    pub fn description(&self) -> &'static str {
        match self {
            StyleKey::Modern => "Modern CV - Clean and contemporary design with ModernCV package",
            StyleKey::Professional => {
                "Professional - Classic two-column layout for all industries"
            }
            StyleKey::Ats => "ATS-Optimized - Simple format that passes automated screening",
            StyleKey::Creative => "Creative - Bold and unique design for creative professionals",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = RenderError;

    /// Parses a style key. Blank input selects the default (professional),
    /// matching what callers sent the original service.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Ok(StyleKey::default());
        }
        match key.to_ascii_lowercase().as_str() {
            "modern" => Ok(StyleKey::Modern),
            "professional" => Ok(StyleKey::Professional),
            "ats" => Ok(StyleKey::Ats),
            "creative" => Ok(StyleKey::Creative),
            _ => Err(RenderError::TemplateNotFound {
                style: key.to_string(),
            }),
        }
    }
}

/// Every shipped style with its description, in presentation order.
pub fn available_templates() -> Vec<(StyleKey, &'static str)> {
    StyleKey::ALL.iter().map(|s| (*s, s.description())).collect()
}

/// Supplies raw template text for a style. The engine's single upstream
/// dependency; implementations must be pure lookups.
pub trait TemplateSource {
    fn load(&self, style: StyleKey) -> Result<String, RenderError>;
}

/// The shipped templates, embedded at compile time. Infallible for every
/// [`StyleKey`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, style: StyleKey) -> Result<String, RenderError> {
        let text = match style {
            StyleKey::Modern => include_str!("../templates/modern_template.tex"),
            StyleKey::Professional => include_str!("../templates/professional_template.tex"),
            StyleKey::Ats => include_str!("../templates/ats_template.tex"),
            StyleKey::Creative => include_str!("../templates/creative_template.tex"),
        };
        Ok(text.to_string())
    }
}
