//! Section and loop primitives over the `{{...}}` marker language.
//!
//! A `{{#NAME}} ... {{/NAME}}` block is either a conditional section
//! (kept-and-unwrapped or removed whole) or a loop body (one rendered copy
//! per list item). The syntax is identical; the renderer's wiring decides
//! which treatment a given NAME gets.
//!
//! Matching is first-occurrence substring search, not a balanced parse.
//! Templates must not repeat or nest a block name; the shipped styles use
//! every wired name exactly once. A malformed block (open without close,
//! or vice versa) is left untouched here and swept up by the sanitizer.

use crate::escape::escape;

fn open_tag(name: &str) -> String {
    format!("{{{{#{name}}}}}")
}

fn close_tag(name: &str) -> String {
    format!("{{{{/{name}}}}}")
}

fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Replaces every `{{name}}` placeholder with the escaped value.
pub fn replace_placeholder(template: &str, name: &str, value: &str) -> String {
    template.replace(&placeholder(name), &escape(value))
}

/// Removes the first `{{#name}} ... {{/name}}` block, tags included.
/// If either tag is missing the template is returned unchanged.
pub fn remove_section(template: &str, name: &str) -> String {
    let open = open_tag(name);
    let close = close_tag(name);

    let Some(start) = template.find(&open) else {
        return template.to_string();
    };
    let body_start = start + open.len();
    let Some(rel) = template[body_start..].find(&close) else {
        return template.to_string();
    };
    let end = body_start + rel + close.len();

    format!("{}{}", &template[..start], &template[end..])
}

/// Strips every occurrence of the `{{#name}}` and `{{/name}}` tag strings,
/// keeping the content between them.
pub fn unwrap_section(template: &str, name: &str) -> String {
    template
        .replace(&open_tag(name), "")
        .replace(&close_tag(name), "")
}

/// Resolves an optional section: a blank or absent value removes the whole
/// block; a present value unwraps the block and substitutes the escaped
/// value into any `{{name}}` placeholders inside it.
pub fn apply_optional_section(template: &str, name: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => {
            let unwrapped = unwrap_section(template, name);
            replace_placeholder(&unwrapped, name, v)
        }
        _ => remove_section(template, name),
    }
}

/// Extracts the fragment strictly between the first `{{#name}}` and the
/// first `{{/name}}` after it. `None` if either tag is missing.
pub fn extract_loop_body<'a>(template: &'a str, name: &str) -> Option<&'a str> {
    let open = open_tag(name);
    let close = close_tag(name);

    let start = template.find(&open)?;
    let body_start = start + open.len();
    let rel = template[body_start..].find(&close)?;

    Some(&template[body_start..body_start + rel])
}

/// Replaces the entire first `{{#name}} ... {{/name}}` block, tags
/// included, with already-rendered content. The content is spliced as-is:
/// it is rendered markup, not a leaf value, and is never re-escaped.
/// If either tag is missing the template is returned unchanged.
pub fn splice_loop(template: &str, name: &str, rendered: &str) -> String {
    let open = open_tag(name);
    let close = close_tag(name);

    let Some(start) = template.find(&open) else {
        return template.to_string();
    };
    let body_start = start + open.len();
    let Some(rel) = template[body_start..].find(&close) else {
        return template.to_string();
    };
    let end = body_start + rel + close.len();

    format!("{}{}{}", &template[..start], rendered, &template[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_section_deletes_tags_and_content() {
        let t = "before {{#LINK}}link: {{LINK}}{{/LINK}} after";
        assert_eq!(remove_section(t, "LINK"), "before  after");
    }

    #[test]
    fn test_remove_section_missing_open_is_noop() {
        let t = "no tags here {{/LINK}}";
        assert_eq!(remove_section(t, "LINK"), t);
    }

    #[test]
    fn test_remove_section_missing_close_is_noop() {
        let t = "dangling {{#LINK}} open";
        assert_eq!(remove_section(t, "LINK"), t);
    }

    #[test]
    fn test_unwrap_section_keeps_content() {
        let t = "x{{#SUMMARY}}kept{{/SUMMARY}}y";
        assert_eq!(unwrap_section(t, "SUMMARY"), "xkepty");
    }

    #[test]
    fn test_apply_optional_section_present_substitutes_escaped_value() {
        let t = "Name: {{NAME}}{{#LINK}}, {{LINK}}{{/LINK}}";
        let out = apply_optional_section(t, "LINK", Some("http://a"));
        assert_eq!(out, "Name: {{NAME}}, http://a");
    }

    #[test]
    fn test_apply_optional_section_absent_removes_block() {
        let t = "Name: {{NAME}}{{#LINK}}, {{LINK}}{{/LINK}}";
        assert_eq!(apply_optional_section(t, "LINK", None), "Name: {{NAME}}");
        assert_eq!(
            apply_optional_section(t, "LINK", Some("   ")),
            "Name: {{NAME}}",
            "blank value must behave like an absent value"
        );
    }

    #[test]
    fn test_apply_optional_section_escapes_value() {
        let t = "{{#ORG}}{{ORG}}{{/ORG}}";
        assert_eq!(apply_optional_section(t, "ORG", Some("R&D")), "R\\&D");
    }

    #[test]
    fn test_placeholder_and_optional_block_compose() {
        let t = "Name: {{NAME}}{{#LINK}}, {{LINK}}{{/LINK}}";

        let with_link = apply_optional_section(t, "LINK", Some("http://a"));
        assert_eq!(replace_placeholder(&with_link, "NAME", "X"), "Name: X, http://a");

        let without_link = apply_optional_section(t, "LINK", None);
        assert_eq!(replace_placeholder(&without_link, "NAME", "X"), "Name: X");
    }

    #[test]
    fn test_replace_placeholder_replaces_all_occurrences() {
        let t = "{{EMAIL}} and again {{EMAIL}}";
        assert_eq!(
            replace_placeholder(t, "EMAIL", "a_b@c.io"),
            "a\\_b@c.io and again a\\_b@c.io"
        );
    }

    #[test]
    fn test_extract_loop_body_returns_inner_fragment() {
        let t = "head{{#ITEMS}}- {{TITLE}}\n{{/ITEMS}}tail";
        assert_eq!(extract_loop_body(t, "ITEMS"), Some("- {{TITLE}}\n"));
    }

    #[test]
    fn test_extract_loop_body_missing_tag_is_none() {
        assert_eq!(extract_loop_body("no loop", "ITEMS"), None);
        assert_eq!(extract_loop_body("{{#ITEMS}} open only", "ITEMS"), None);
    }

    #[test]
    fn test_splice_loop_replaces_whole_block() {
        let t = "head{{#ITEMS}}- {{TITLE}}\n{{/ITEMS}}tail";
        assert_eq!(splice_loop(t, "ITEMS", "- A\n- B\n"), "head- A\n- B\ntail");
    }

    #[test]
    fn test_splice_loop_missing_tags_is_noop() {
        let t = "plain text";
        assert_eq!(splice_loop(t, "ITEMS", "content"), t);
    }

    /// Close tag is searched after the open tag, so a stray close earlier
    /// in the template does not produce an inside-out splice.
    #[test]
    fn test_close_tag_before_open_tag_is_noop() {
        let t = "{{/ITEMS}} stray {{#ITEMS}}body";
        assert_eq!(remove_section(t, "ITEMS"), t);
        assert_eq!(extract_loop_body(t, "ITEMS"), None);
    }
}
