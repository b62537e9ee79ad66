//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vhostgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `SiteSource`: site-definition loading
//!   - `ConfigRenderer`: template rendering
//!   - `Filesystem`: file operations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConfigRenderer, Filesystem, SiteSource};
