//! Application layer errors.
//!
//! These errors represent failures in orchestration, not shape rules.
//! Shape rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// All variants except `RenderFailed` are fatal for the run; `RenderFailed`
/// is caught per-site by the service.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The domains file does not exist.
    #[error("Domains config not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The domains file exists but its top-level structure is wrong.
    #[error("Invalid structure in {path}: {reason}")]
    SourceInvalid { path: PathBuf, reason: String },

    /// The templates directory does not exist.
    #[error("Templates directory not found: {path}")]
    TemplatesDirNotFound { path: PathBuf },

    /// The template engine could not load the templates directory.
    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoadFailed { path: PathBuf, reason: String },

    /// The named template is not present in the templates directory.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Rendering one site's config failed.
    #[error("Template render failed for '{site_key}': {reason}")]
    RenderFailed { site_key: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { path } => vec![
                format!("No domains file at: {}", path.display()),
                "Pass the right path with --domains-config / -d".into(),
            ],
            Self::SourceInvalid { .. } => vec![
                "The domains file needs a top-level 'sites' mapping".into(),
                "sites:\n  my-site:\n    hostnames: [my.example.com]\n    upstream: ...".into(),
            ],
            Self::TemplatesDirNotFound { path } => vec![
                format!("No directory at: {}", path.display()),
                "Pass the right directory with --templates-dir / -t".into(),
            ],
            Self::TemplateLoadFailed { .. } => vec![
                "One of the templates in the directory has a syntax error".into(),
                "Fix the template or point --templates-dir elsewhere".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}' in the templates directory", name),
                "Pass the right filename with --template-name".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. }
            | Self::TemplatesDirNotFound { .. }
            | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::SourceInvalid { .. } => ErrorCategory::Validation,
            Self::TemplateLoadFailed { .. } => ErrorCategory::Configuration,
            Self::RenderFailed { .. } | Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
