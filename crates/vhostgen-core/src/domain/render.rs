//! Render parameters: the resolved, defaulted field set passed to the
//! template engine for one site.

use serde::Serialize;

use crate::domain::site::{SiteDefinition, Upstream};

/// Body-size limit applied when a site does not specify one.
pub const DEFAULT_CLIENT_MAX_BODY_SIZE: &str = "1M";

/// Flat parameter record handed to the template engine.
///
/// Field names are the template-visible contract: `site_key`, `hostnames`,
/// `upstream`, `client_max_body_size`, `force_https`. Ephemeral, one per
/// site per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderParams {
    pub site_key: String,
    pub hostnames: Vec<String>,
    pub upstream: Upstream,
    pub client_max_body_size: String,
    pub force_https: bool,
}

impl RenderParams {
    /// Build the parameter record for a validated site, applying defaults:
    /// `client_max_body_size` falls back to [`DEFAULT_CLIENT_MAX_BODY_SIZE`],
    /// `force_https` to `false`.
    pub fn resolve(site_key: &str, site: &SiteDefinition) -> Self {
        Self {
            site_key: site_key.to_owned(),
            hostnames: site.hostnames.clone(),
            upstream: site.upstream.clone(),
            client_max_body_size: site
                .client_max_body_size
                .clone()
                .unwrap_or_else(|| DEFAULT_CLIENT_MAX_BODY_SIZE.to_owned()),
            force_https: site.force_https.unwrap_or(false),
        }
    }
}
