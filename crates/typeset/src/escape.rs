//! LaTeX escaping for leaf values spliced into a template.
//!
//! The substitution table is ordered: the backslash rule MUST run first,
//! otherwise the backslashes introduced by the later rules would themselves
//! be rewritten. Later rules do rescan earlier replacement text, so the
//! braces of `\textbackslash{}` come out escaped while the braces of
//! `\textasciitilde{}` stay literal. Downstream LaTeX is fine with both;
//! changing either would silently change every compiled resume.

/// Escapes LaTeX special characters in a leaf value. Total; never fails.
///
/// Applied exactly once per leaf, at splice time. Never call this on text
/// that already contains rendered markup (loop output, `\resumeItem` lines).
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.replace('\\', "\\textbackslash{}")
        .replace('&', "\\&")
        .replace('%', "\\%")
        .replace('$', "\\$")
        .replace('#', "\\#")
        .replace('_', "\\_")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('~', "\\textasciitilde{}")
        .replace('^', "\\textasciicircum{}")
}
