//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vhostgen-adapters` crate provides implementations.

use crate::domain::{RenderParams, SiteCollection};
use crate::error::VhostgenResult;
use std::path::{Path, PathBuf};

/// Port for loading site definitions.
///
/// Implemented by:
/// - `vhostgen_adapters::site_source::YamlSiteSource` (production)
/// - `vhostgen_adapters::site_source::StaticSiteSource` (testing)
///
/// Loading fails on structural problems only (missing file, no top-level
/// site collection); per-site shape problems are deferred to the validator.
pub trait SiteSource: Send + Sync {
    /// Load the full site collection, in document order.
    fn load(&self) -> VhostgenResult<SiteCollection>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `vhostgen_adapters::renderer::TeraRenderer` (production)
///
/// Templating semantics (conditionals, loops, escaping) are owned entirely
/// by the engine behind this port.
pub trait ConfigRenderer: Send + Sync {
    /// Whether the named template was loaded. Checked once, before any
    /// per-site work.
    fn has_template(&self, name: &str) -> bool;

    /// Render one site's parameters through the named template.
    fn render(&self, name: &str, params: &RenderParams) -> VhostgenResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vhostgen_adapters::filesystem::LocalFilesystem` (production)
/// - `vhostgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> VhostgenResult<()>;

    /// Write content to a file, fully overwriting an existing one.
    fn write_file(&self, path: &Path, content: &str) -> VhostgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the `*.conf` files directly inside a directory (non-recursive).
    fn conf_files(&self, dir: &Path) -> VhostgenResult<Vec<PathBuf>>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> VhostgenResult<()>;
}
