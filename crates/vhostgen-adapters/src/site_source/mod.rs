//! Site-definition source adapters.

pub mod memory;
pub mod yaml;

pub use memory::StaticSiteSource;
pub use yaml::YamlSiteSource;
