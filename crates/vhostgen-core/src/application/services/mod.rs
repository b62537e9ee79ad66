//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "generate virtual-host configs".

pub mod generate_service;

pub use generate_service::{GenerateOptions, GenerateReport, GenerateService};
