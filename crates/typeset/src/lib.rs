//! Renders a structured resume into LaTeX source for one of the shipped
//! template styles.
//!
//! Templates embed a small marker language: `{{NAME}}` placeholders and
//! `{{#NAME}} ... {{/NAME}}` blocks that act as conditional sections or as
//! repeated-entry loop bodies depending on the field they are wired to.
//! Rendering is a one-shot pure function of (template, resume): leaf values
//! are LaTeX-escaped exactly once at splice time, free text is normalized
//! deterministically, and a final sanitizer pass guarantees the output
//! contains no marker syntax whatever the input looked like.
//!
//! Compiling the produced LaTeX into a PDF, and storing or transporting
//! resume data, belong to the surrounding service, not to this crate.

pub mod errors;
pub mod escape;
pub mod markers;
pub mod models;
pub mod normalize;
pub mod render;
pub mod sanitize;
pub mod store;

pub use errors::RenderError;
pub use models::resume::Resume;
pub use render::render_resume;
pub use store::{available_templates, EmbeddedTemplates, StyleKey, TemplateSource};
