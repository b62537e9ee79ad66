//! Tera renderer adapter.
//!
//! Loads every template in the templates directory once at construction;
//! per-site rendering goes through [`tera::Context::from_serialize`] so the
//! template sees exactly the documented parameter names.

use std::path::Path;

use tera::{Context, Tera};
use tracing::{debug, instrument};

use vhostgen_core::{
    application::{ApplicationError, ports::ConfigRenderer},
    domain::RenderParams,
    error::VhostgenResult,
};

/// Production renderer backed by the tera engine.
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Load all templates under `dir`.
    ///
    /// Fails when the directory does not exist or the engine rejects one of
    /// the templates — both fatal for the run, before any per-site work.
    pub fn from_dir(dir: &Path) -> VhostgenResult<Self> {
        if !dir.is_dir() {
            return Err(ApplicationError::TemplatesDirNotFound {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let glob = format!("{}/**/*", dir.display());
        let tera = Tera::new(&glob).map_err(|e| ApplicationError::TemplateLoadFailed {
            path: dir.to_path_buf(),
            reason: error_chain(&e),
        })?;

        debug!(
            dir = %dir.display(),
            templates = tera.get_template_names().count(),
            "Loaded templates"
        );
        Ok(Self { tera })
    }
}

impl ConfigRenderer for TeraRenderer {
    fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    #[instrument(skip_all, fields(site = %params.site_key, template = name))]
    fn render(&self, name: &str, params: &RenderParams) -> VhostgenResult<String> {
        let render_failed = |e: &tera::Error| ApplicationError::RenderFailed {
            site_key: params.site_key.clone(),
            reason: error_chain(e),
        };

        let context = Context::from_serialize(params).map_err(|e| render_failed(&e))?;
        self.tera
            .render(name, &context)
            .map_err(|e| render_failed(&e).into())
    }
}

/// Flatten a tera error and its sources into one line.
///
/// Tera's top-level message is usually just "Failed to render 'x'"; the
/// actual cause sits in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(err) = source {
        parts.push(err.to_string());
        source = err.source();
    }
    parts.join(": ")
}
