//! In-memory site source for testing.

use vhostgen_core::{
    application::ports::SiteSource, domain::SiteCollection, error::VhostgenResult,
};

/// Site source serving a pre-built collection.
#[derive(Debug, Clone, Default)]
pub struct StaticSiteSource {
    collection: SiteCollection,
}

impl StaticSiteSource {
    /// Create a source that always returns the given collection.
    pub fn new(collection: SiteCollection) -> Self {
        Self { collection }
    }
}

impl SiteSource for StaticSiteSource {
    fn load(&self) -> VhostgenResult<SiteCollection> {
        Ok(self.collection.clone())
    }
}
