// ============================================================================
// domain/error.rs - SITE VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant names exactly one failed site and the discriminated reason
/// it was rejected. Domain errors are always per-site and recoverable: the
/// caller logs them and skips the site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required top-level keys are absent.
    #[error("site '{}' is missing required keys: {}", .key, .keys.join(", "))]
    MissingKeys {
        key: String,
        keys: Vec<&'static str>,
    },

    /// `hostnames` decoded but holds no entries.
    #[error("site '{key}' has invalid or empty 'hostnames'")]
    EmptyHostnames { key: String },

    /// `upstream` is present but not a complete definition.
    #[error("site '{}' has invalid 'upstream' definition: missing {}", .key, .missing.join(", "))]
    IncompleteUpstream {
        key: String,
        missing: Vec<&'static str>,
    },

    /// The entry's value could not be decoded into the expected shape at all.
    #[error("site '{key}' could not be decoded: {reason}")]
    Undecodable { key: String, reason: String },
}

impl DomainError {
    /// The key of the site this error rejects.
    pub fn site_key(&self) -> &str {
        match self {
            Self::MissingKeys { key, .. }
            | Self::EmptyHostnames { key }
            | Self::IncompleteUpstream { key, .. }
            | Self::Undecodable { key, .. } => key,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingKeys { key, keys } => vec![
                format!("Add the missing keys to site '{}': {}", key, keys.join(", ")),
                "Each site needs 'hostnames' (list) and 'upstream' (name + servers)".into(),
            ],
            Self::EmptyHostnames { key } => vec![
                format!("Give site '{}' at least one hostname", key),
                "The first hostname becomes the output filename".into(),
            ],
            Self::IncompleteUpstream { key, missing } => vec![
                format!(
                    "Complete the 'upstream' block of site '{}': missing {}",
                    key,
                    missing.join(", ")
                ),
                "An upstream needs a 'name' and a 'servers' list of {host, port} pairs".into(),
            ],
            Self::Undecodable { key, .. } => vec![
                format!("Check the YAML types of site '{}'", key),
                "hostnames is a list of strings; servers is a list of {host, port} pairs".into(),
            ],
        }
    }
}
