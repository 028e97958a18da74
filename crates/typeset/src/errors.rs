//! Error type for the rendering engine.
//!
//! Rendering is total: missing fields degrade to removed sections or
//! placeholder text, never to an error. The one hard failure is a template
//! lookup miss, since there is nothing sensible to render without template
//! text. No partial output is ever produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No template text exists for the requested style. The caller decides
    /// whether to fall back to another style or surface the failure.
    #[error("LaTeX template not found: {style}")]
    TemplateNotFound { style: String },
}
