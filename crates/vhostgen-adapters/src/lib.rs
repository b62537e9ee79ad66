//! Infrastructure adapters for vhostgen.
//!
//! This crate implements the ports defined in
//! `vhostgen_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod site_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::TeraRenderer;
pub use site_source::{StaticSiteSource, YamlSiteSource};
