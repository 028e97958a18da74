//! Final defensive cleanup guaranteeing marker-free output.
//!
//! Runs after every substitution pass. If a field was never wired, a
//! template carries an unanticipated marker, or a malformed block survived
//! the section passes, LaTeX must still never see `{{`; a stray `#` alone
//! is enough to break compilation. Three passes, in order: balanced
//! `{{#NAME}}...{{/NAME}}` spans (across newlines), triple-braced
//! placeholders, then any remaining double-braced tag including unmatched
//! single `{{#NAME}}`/`{{/NAME}}` tags.

use std::sync::LazyLock;

use regex::Regex;

/// Open tag of a section/loop block, capturing the name.
static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#\s*([A-Za-z0-9_]+)\s*\}\}").expect("open tag regex"));

/// Close tag of a section/loop block, capturing the name.
static CLOSE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{/\s*([A-Za-z0-9_]+)\s*\}\}").expect("close tag regex"));

/// Triple-braced placeholder: `{{{NAME}}}`.
static TRIPLE_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\{\s*[A-Za-z0-9_]+\s*\}\}\}").expect("triple regex"));

/// Double-braced tag of any kind: `{{NAME}}`, `{{#NAME}}`, `{{/NAME}}`.
static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*[#/]?\s*[A-Za-z0-9_]+\s*\}\}").expect("tag regex"));

/// Removes every leftover marker from rendered output. Idempotent, total.
pub fn sanitize(text: &str) -> String {
    let text = strip_section_spans(text);
    let text = TRIPLE_PLACEHOLDER_RE.replace_all(&text, "");
    let text = ANY_TAG_RE.replace_all(&text, "");
    text.into_owned()
}

/// Removes every balanced `{{#NAME}} ... {{/NAME}}` span, matching the
/// nearest close tag with the same name. The `regex` crate has no
/// backreferences, so the name equality check is a scan over close-tag
/// matches instead of a `\1` pattern. An open tag with no matching close
/// is kept; the last pass of [`sanitize`] deletes the bare tag.
fn strip_section_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(caps) = OPEN_TAG_RE.captures(rest) {
        let open = caps.get(0).expect("whole match");
        let name = caps.get(1).expect("name group").as_str();

        let after_open = &rest[open.end()..];
        let close = CLOSE_TAG_RE
            .captures_iter(after_open)
            .find(|c| c.get(1).expect("name group").as_str() == name)
            .map(|c| c.get(0).expect("whole match").end());

        match close {
            Some(close_end) => {
                out.push_str(&rest[..open.start()]);
                rest = &after_open[close_end..];
            }
            None => {
                out.push_str(&rest[..open.end()]);
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_untouched() {
        let latex = "\\section{Experience}\n\\resumeItem{Built things}";
        assert_eq!(sanitize(latex), latex);
    }

    #[test]
    fn test_removes_balanced_section_span() {
        let text = "keep {{#GONE}}inner {{STUFF}} here{{/GONE}} keep";
        assert_eq!(sanitize(text), "keep  keep");
    }

    #[test]
    fn test_removes_section_span_across_newlines() {
        let text = "a{{#BLOCK}}\nline one\nline two\n{{/BLOCK}}b";
        assert_eq!(sanitize(text), "ab");
    }

    #[test]
    fn test_removes_triple_placeholder() {
        assert_eq!(sanitize("x{{{NAME}}}y"), "xy");
    }

    #[test]
    fn test_removes_double_placeholder() {
        assert_eq!(sanitize("x{{NAME}}y"), "xy");
        assert_eq!(sanitize("x{{ NAME }}y"), "xy");
    }

    #[test]
    fn test_removes_unmatched_single_tags() {
        assert_eq!(sanitize("x{{#OPEN_ONLY}}y"), "xy");
        assert_eq!(sanitize("x{{/CLOSE_ONLY}}y"), "xy");
    }

    #[test]
    fn test_mismatched_names_resolved_tag_by_tag() {
        // No balanced span: the two bare tags are removed individually,
        // the content between them survives.
        assert_eq!(sanitize("a{{#ONE}}b{{/TWO}}c"), "abc");
    }

    #[test]
    fn test_multiple_spans_all_removed() {
        let text = "{{#A}}x{{/A}}mid{{#B}}y{{/B}}";
        assert_eq!(sanitize(text), "mid");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain text",
            "{{#A}}x{{/A}}y{{REST}}{{{TRIPLE}}}",
            "{{#OPEN}}never closed",
            "\\resumeItem{50\\%}",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "sanitize(sanitize(x)) != sanitize(x) for {input:?}");
        }
    }

    #[test]
    fn test_latex_braces_are_not_markers() {
        let latex = "\\newcommand{\\resumeItem}[1]{\\item\\small{#1}}";
        assert_eq!(sanitize(latex), latex);
    }
}
