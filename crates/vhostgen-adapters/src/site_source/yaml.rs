//! YAML site source adapter using serde_yaml_ng.

use std::path::PathBuf;

use serde_yaml_ng::Value;
use tracing::debug;

use vhostgen_core::{
    application::{ApplicationError, ports::SiteSource},
    domain::{RawSite, SiteCollection, SiteDocument},
    error::VhostgenResult,
};

/// Production site source reading a YAML domains file.
///
/// Structural problems (missing file, unreadable file, no top-level `sites`
/// mapping, non-string site keys) fail the load. Per-site shape problems do
/// not: each entry is decoded leniently and undecodable ones are recorded as
/// [`RawSite::Malformed`] for the validator to reject later.
#[derive(Debug, Clone)]
pub struct YamlSiteSource {
    path: PathBuf,
}

impl YamlSiteSource {
    /// Create a source for the given domains file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn invalid(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::SourceInvalid {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl SiteSource for YamlSiteSource {
    fn load(&self) -> VhostgenResult<SiteCollection> {
        if !self.path.exists() {
            return Err(ApplicationError::SourceNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let text =
            std::fs::read_to_string(&self.path).map_err(|e| ApplicationError::Filesystem {
                path: self.path.clone(),
                reason: format!("Failed to read file: {e}"),
            })?;

        let document: Value = serde_yaml_ng::from_str(&text)
            .map_err(|e| self.invalid(format!("not valid YAML: {e}")))?;

        if !document.is_mapping() {
            return Err(self.invalid("document is not a mapping").into());
        }

        let sites = document
            .get("sites")
            .ok_or_else(|| self.invalid("missing top-level 'sites'"))?;

        let Value::Mapping(sites) = sites else {
            return Err(self.invalid("'sites' is not a mapping").into());
        };

        let mut collection = SiteCollection::new();
        for (key, value) in sites {
            let Value::String(key) = key else {
                return Err(self.invalid("site keys must be strings").into());
            };

            // Lenient per-entry decode: a wrong-typed site is carried as
            // malformed and rejected per-site by the validator, never here.
            let raw = match serde_yaml_ng::from_value::<SiteDocument>(value.clone()) {
                Ok(doc) => RawSite::Parsed(doc),
                Err(e) => RawSite::Malformed {
                    reason: e.to_string(),
                },
            };
            collection.push(key.clone(), raw);
        }

        debug!(path = %self.path.display(), sites = collection.len(), "Loaded domains file");
        Ok(collection)
    }
}
