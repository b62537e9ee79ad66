//! Command handlers.
//!
//! vhostgen has a single use case; `generate` is its only handler.

pub mod generate;
