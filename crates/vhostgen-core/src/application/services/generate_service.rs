//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Load the site collection
//! 2. Check the named template exists (once, up front)
//! 3. Optional clean pass over the output directory
//! 4. Validate, render, and write each site in order
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). Validation and render failures are isolated per-site:
//! the failing site is logged and skipped, the run continues.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigRenderer, Filesystem, SiteSource},
    },
    domain::{DomainValidator, RenderParams},
    error::VhostgenResult,
};

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Template filename within the renderer's templates directory.
    pub template_name: String,
    /// Directory the rendered configs are written into.
    pub output_dir: PathBuf,
    /// Delete existing `*.conf` files in the output directory first.
    pub clean: bool,
    /// Validate and render, but write and delete nothing.
    pub dry_run: bool,
}

/// Outcome summary of a generation run, for display purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Output paths written (or, in dry-run mode, that would be written),
    /// in processing order.
    pub written: Vec<PathBuf>,
    /// Keys of sites skipped by validation or render failure.
    pub skipped: Vec<String>,
    /// Number of stale `*.conf` files removed by the clean pass.
    pub cleaned: usize,
}

/// Main generation service.
///
/// Orchestrates the load, validate, render, write workflow.
pub struct GenerateService {
    source: Box<dyn SiteSource>,
    renderer: Box<dyn ConfigRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        source: Box<dyn SiteSource>,
        renderer: Box<dyn ConfigRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
        }
    }

    /// Generate one config file per valid site.
    ///
    /// This is the main use case. Structural failures (source, template,
    /// filesystem writes) propagate as fatal errors; per-site failures are
    /// logged at error level and recorded in the report's `skipped` list.
    #[instrument(
        skip_all,
        fields(
            template = %options.template_name,
            output_dir = %options.output_dir.display(),
        )
    )]
    pub fn generate(&self, options: &GenerateOptions) -> VhostgenResult<GenerateReport> {
        info!("Loading site definitions");
        let sites = self.source.load()?;
        info!(sites = sites.len(), "Site definitions loaded");

        // One up-front existence check; a missing template is fatal for the
        // whole run, before any cleaning or writing happens.
        if !self.renderer.has_template(&options.template_name) {
            return Err(ApplicationError::TemplateNotFound {
                name: options.template_name.clone(),
            }
            .into());
        }

        let cleaned = if options.clean {
            self.clean_output(&options.output_dir, options.dry_run)?
        } else {
            0
        };

        if !options.dry_run {
            self.filesystem.create_dir_all(&options.output_dir)?;
        }

        let mut report = GenerateReport {
            cleaned,
            ..GenerateReport::default()
        };

        for (key, raw) in sites.iter() {
            let site = match DomainValidator::validate_site(key, raw) {
                Ok(site) => site,
                Err(e) => {
                    error!(site = key, "{e}");
                    report.skipped.push(key.to_owned());
                    continue;
                }
            };

            let params = RenderParams::resolve(key, &site);
            let out_path = options.output_dir.join(site.output_filename());
            info!(site = key, path = %out_path.display(), "Rendering");

            // Rendering completes in memory before any write begins, so a
            // render failure never leaves a partial file behind.
            let content = match self.renderer.render(&options.template_name, &params) {
                Ok(content) => content,
                Err(e) => {
                    error!(site = key, "{e}");
                    report.skipped.push(key.to_owned());
                    continue;
                }
            };

            if options.dry_run {
                debug!(site = key, bytes = content.len(), "Dry run, not writing");
            } else {
                self.filesystem.write_file(&out_path, &content)?;
                debug!(site = key, bytes = content.len(), "Wrote config");
            }
            report.written.push(out_path);
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Done"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Delete every `*.conf` directly inside the output directory.
    ///
    /// Runs before validation and rendering: stale configs for sites removed
    /// from the domains file are cleared, and a site failing validation this
    /// run also loses its previous output with nothing to replace it.
    fn clean_output(&self, dir: &Path, dry_run: bool) -> VhostgenResult<usize> {
        if !self.filesystem.exists(dir) {
            return Ok(0);
        }
        info!(dir = %dir.display(), "Cleaning existing configs");

        let stale = self.filesystem.conf_files(dir)?;
        let count = stale.len();
        for old in stale {
            if dry_run {
                debug!(path = %old.display(), "Dry run, would remove");
            } else {
                debug!(path = %old.display(), "Removing");
                self.filesystem.remove_file(&old)?;
            }
        }
        Ok(count)
    }
}
