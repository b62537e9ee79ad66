//! Site definitions: the raw document shapes read from the domains file and
//! the validated records the rest of the pipeline works with.

use serde::{Deserialize, Serialize};

/// One site entry as it appears in the domains file, before validation.
///
/// Every field is optional so that a partially specified site still decodes;
/// required-shape checking lives in [`super::DomainValidator`]. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteDocument {
    pub hostnames: Option<Vec<String>>,
    pub upstream: Option<UpstreamDocument>,
    pub client_max_body_size: Option<String>,
    pub force_https: Option<bool>,
}

/// The `upstream` block of a site entry, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpstreamDocument {
    pub name: Option<String>,
    pub servers: Option<Vec<UpstreamServer>>,
}

/// A single backend in an upstream pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamServer {
    pub host: String,
    pub port: u16,
}

/// A validated upstream pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upstream {
    pub name: String,
    pub servers: Vec<UpstreamServer>,
}

/// A validated site definition. Immutable after validation, discarded after
/// rendering.
///
/// Invariant: `hostnames` is non-empty; the first element is the canonical
/// identifier used for the output filename.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDefinition {
    pub hostnames: Vec<String>,
    pub upstream: Upstream,
    pub client_max_body_size: Option<String>,
    pub force_https: Option<bool>,
}

impl SiteDefinition {
    /// The canonical hostname, used to derive the output filename.
    pub fn primary_hostname(&self) -> &str {
        &self.hostnames[0]
    }

    /// Filename of the rendered config: `<primary hostname>.conf`.
    pub fn output_filename(&self) -> String {
        format!("{}.conf", self.primary_hostname())
    }
}

/// One entry of the domains file: decoded into the lenient document shape,
/// or recorded as malformed when the value could not be decoded at all.
///
/// Malformed entries are rejected by the validator per-site; they never
/// abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSite {
    Parsed(SiteDocument),
    Malformed { reason: String },
}

/// Ordered collection of raw site entries, keyed by site key.
///
/// Keys are unique by construction (the source format is a mapping);
/// iteration order follows the domains file's insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollection {
    entries: Vec<(String, RawSite)>,
}

impl SiteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a site entry, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, site: RawSite) {
        self.entries.push((key.into(), site));
    }

    /// Number of entries (valid or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawSite)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }
}

impl FromIterator<(String, RawSite)> for SiteCollection {
    fn from_iter<I: IntoIterator<Item = (String, RawSite)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
