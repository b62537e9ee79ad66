//! Vhostgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the vhostgen
//! virtual-host config generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vhostgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Driven: Source, Renderer, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vhostgen-adapters (Infrastructure)   │
//! │ (YamlSiteSource, TeraRenderer, LocalFs) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SiteDefinition, Upstream, Validation) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vhostgen_core::application::{GenerateOptions, GenerateService};
//!
//! // Use application service (with injected adapters)
//! let service = GenerateService::new(source, renderer, filesystem);
//! let report = service.generate(&GenerateOptions {
//!     template_name: "site.conf.j2".into(),
//!     output_dir: "nginx/sites-enabled".into(),
//!     clean: false,
//!     dry_run: false,
//! })?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerateReport, GenerateService,
        ports::{ConfigRenderer, Filesystem, SiteSource},
    };
    pub use crate::domain::{
        RawSite, RenderParams, SiteCollection, SiteDefinition, SiteDocument, Upstream,
        UpstreamDocument, UpstreamServer,
    };
    pub use crate::error::{VhostgenError, VhostgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
