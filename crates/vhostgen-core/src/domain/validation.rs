use crate::domain::{
    error::DomainError,
    site::{RawSite, SiteDefinition, Upstream},
};

/// Centralized domain validation.
///
/// All shape-checking of site entries lives here, not scattered across
/// entities or the service.
pub struct DomainValidator;

impl DomainValidator {
    /// Check one raw site entry against the required shape.
    ///
    /// Returns the validated, strongly typed [`SiteDefinition`] or the first
    /// failing check as a discriminated [`DomainError`]. Checks run in order:
    /// decodability, required keys (`hostnames`, `upstream` — missing ones
    /// reported together as a set), non-empty `hostnames`, complete
    /// `upstream` (`name` and `servers`).
    ///
    /// Deeper validation of server entries, `client_max_body_size` format,
    /// or hostname syntax is deliberately absent: those values pass through
    /// verbatim to the renderer.
    pub fn validate_site(key: &str, raw: &RawSite) -> Result<SiteDefinition, DomainError> {
        let doc = match raw {
            RawSite::Parsed(doc) => doc,
            RawSite::Malformed { reason } => {
                return Err(DomainError::Undecodable {
                    key: key.to_owned(),
                    reason: reason.clone(),
                });
            }
        };

        let mut missing = Vec::new();
        if doc.hostnames.is_none() {
            missing.push("hostnames");
        }
        if doc.upstream.is_none() {
            missing.push("upstream");
        }
        if !missing.is_empty() {
            return Err(DomainError::MissingKeys {
                key: key.to_owned(),
                keys: missing,
            });
        }

        // Both present past this point; the defaults below never fire.
        let hostnames = doc.hostnames.clone().unwrap_or_default();
        if hostnames.is_empty() {
            return Err(DomainError::EmptyHostnames {
                key: key.to_owned(),
            });
        }

        let up = doc.upstream.clone().unwrap_or_default();
        let mut incomplete = Vec::new();
        if up.name.is_none() {
            incomplete.push("name");
        }
        if up.servers.is_none() {
            incomplete.push("servers");
        }
        if !incomplete.is_empty() {
            return Err(DomainError::IncompleteUpstream {
                key: key.to_owned(),
                missing: incomplete,
            });
        }

        Ok(SiteDefinition {
            hostnames,
            upstream: Upstream {
                name: up.name.unwrap_or_default(),
                servers: up.servers.unwrap_or_default(),
            },
            client_max_body_size: doc.client_max_body_size.clone(),
            force_https: doc.force_https,
        })
    }
}
