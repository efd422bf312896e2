//! Template rendering errors.

use super::error_code::{self, GovlensErrorCode};

/// Errors raised while rendering a description template.
/// These indicate a bug in the template table, not in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Template {template} references placeholder {{{index}}} but only {available} arguments were produced")]
    ArityMismatch {
        template: String,
        index: usize,
        available: usize,
    },
}

impl GovlensErrorCode for TemplateError {
    fn error_code(&self) -> &'static str {
        error_code::TEMPLATE_ARITY_MISMATCH
    }
}
