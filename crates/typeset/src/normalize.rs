//! Free-text normalization for variable-length user input.
//!
//! Project descriptions are forced to exactly [`DESCRIPTION_POINTS`] bullet
//! points because the template layouts are sized for that many lines: extra
//! lines are dropped, short input is padded with deterministic placeholders
//! keyed by position and project title. Experience responsibilities keep
//! their natural length: any number of items, with a single pending-details
//! item when the field is empty.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::escape::escape;
use crate::store::StyleKey;

/// Number of bullet points every rendered project description has.
pub const DESCRIPTION_POINTS: usize = 3;

/// Leading bullet or numbering marker on a single line: `-`, `•`, `*`, `1.`
static LINE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]\s*|^\d+\.\s*").expect("line marker regex"));

/// Splits a responsibility blob into bullet fragments: bullet markers and
/// numbering at line starts, or runs of newlines.
static RESPONSIBILITY_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*[-•*]\s*|(?m)^\s*\d+\.\s*|\n+").expect("responsibility split regex")
});

/// Parses free text into exactly [`DESCRIPTION_POINTS`] trimmed points.
///
/// Lines beyond the limit are discarded; missing lines are synthesized from
/// the position/title lookup table. Total: never fails, never empty.
pub fn parse_description_points(description: &str, title: &str) -> Vec<String> {
    let mut points: Vec<String> = Vec::with_capacity(DESCRIPTION_POINTS);

    let mut dropped = 0usize;
    for line in description.trim().lines() {
        let stripped = LINE_MARKER_RE.replace(line.trim(), "");
        let point = stripped.trim();
        if point.is_empty() {
            continue;
        }
        if points.len() < DESCRIPTION_POINTS {
            points.push(point.to_string());
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(
            project = %title,
            dropped,
            "description has more than {DESCRIPTION_POINTS} points; extras discarded"
        );
    }
    if points.len() < DESCRIPTION_POINTS {
        warn!(
            project = %title,
            parsed = points.len(),
            "description short of {DESCRIPTION_POINTS} points; padding with placeholders"
        );
    }

    while points.len() < DESCRIPTION_POINTS {
        points.push(placeholder_point(title, points.len() + 1));
    }

    points
}

/// Deterministic placeholder for a missing description point. Pure lookup
/// keyed by position; every position references the project title.
fn placeholder_point(title: &str, position: usize) -> String {
    let title = if title.trim().is_empty() {
        "Project"
    } else {
        title
    };

    match position {
        1 => format!("Designed and developed {title} to deliver a high-quality solution"),
        2 => format!("Implemented best practices for code quality and performance across {title}"),
        3 => format!("Integrated modern technologies into {title} for an optimal user experience"),
        _ => format!("Contributed to the success of {title} through technical excellence"),
    }
}

/// Formats a project description as exactly [`DESCRIPTION_POINTS`] leaf
/// items in the active style's syntax. Points are escaped here, at splice
/// time.
pub fn format_project_description(description: &str, title: &str, style: StyleKey) -> String {
    let points = parse_description_points(description, title);
    debug!(project = %title, style = %style, points = points.len(), "formatting project description");

    match style {
        // cventry context: bullet runs separated by forced line breaks
        StyleKey::Modern => points
            .iter()
            .map(|p| format!("\\textbullet~{}", escape(p)))
            .collect::<Vec<_>>()
            .join(" \\\\"),
        StyleKey::Creative => points
            .iter()
            .map(|p| format!("\\textbullet~{}\n\n", escape(p)))
            .collect::<String>()
            .trim()
            .to_string(),
        StyleKey::Ats => points
            .iter()
            .map(|p| format!("• {}\n", escape(p)))
            .collect::<String>()
            .trim()
            .to_string(),
        StyleKey::Professional => {
            let mut out: String = points
                .iter()
                .map(|p| format!("      \\resumeItem{{{}}}\n", escape(p)))
                .collect();
            if out.ends_with('\n') {
                out.pop();
            }
            out
        }
    }
}

/// Formats an experience responsibility blob as `\resumeItem` lines, one
/// per parsed fragment. Emits a single pending-details item when the field
/// is empty, so the surrounding itemize environment is never empty.
pub fn format_responsibility_items(responsibility: &str) -> String {
    let mut items = String::new();

    if !responsibility.trim().is_empty() {
        for fragment in RESPONSIBILITY_SPLIT_RE.split(responsibility) {
            let point = fragment.trim();
            if point.is_empty() {
                continue;
            }
            items.push_str("      \\resumeItem{");
            items.push_str(&escape(point));
            items.push_str("}\n");
        }
    }

    if items.is_empty() {
        warn!("responsibility field empty; emitting placeholder item");
        items.push_str("      \\resumeItem{Responsibility details pending}\n");
    }

    if items.ends_with('\n') {
        items.pop();
    }
    items
}
