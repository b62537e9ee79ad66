//! Core domain layer for vhostgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, YAML parsing, and template rendering concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod error;
pub mod render;
pub mod site;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::DomainError;
pub use render::{DEFAULT_CLIENT_MAX_BODY_SIZE, RenderParams};
pub use site::{
    RawSite, SiteCollection, SiteDefinition, SiteDocument, Upstream, UpstreamDocument,
    UpstreamServer,
};
pub use validation::DomainValidator;
