//! Template renderer adapters.

pub mod tera;

pub use self::tera::TeraRenderer;
