//! Implementation of the generation run.
//!
//! Responsibility: resolve flags against the layered configuration, wire the
//! production adapters into the core service, and display the result. No
//! pipeline logic lives here.

use tracing::{debug, instrument};

use vhostgen_adapters::{LocalFilesystem, TeraRenderer, YamlSiteSource};
use vhostgen_core::application::{GenerateOptions, GenerateService};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute one generation run.
///
/// Dispatch sequence:
/// 1. Resolve paths: CLI flags win over the layered config
/// 2. Build the production adapters (templates dir checked here, once)
/// 3. Run the core service
/// 4. Print the run summary
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Flags fall back to config (which already layered env + file +
    //    defaults).
    let domains_config = args.domains_config.unwrap_or(config.domains_config);
    let templates_dir = args.templates_dir.unwrap_or(config.templates_dir);
    let output_dir = args.output_dir.unwrap_or(config.output_dir);
    let template_name = args.template_name.unwrap_or(config.template_name);

    debug!(
        domains_config = %domains_config.display(),
        templates_dir = %templates_dir.display(),
        output_dir = %output_dir.display(),
        template_name = %template_name,
        clean = args.clean,
        dry_run = args.dry_run,
        "Paths resolved"
    );

    // 2. Create adapters. Loading the templates directory is the first
    //    fatal check; a missing directory or broken template stops here.
    let source = Box::new(YamlSiteSource::new(&domains_config));
    let renderer = Box::new(TeraRenderer::from_dir(&templates_dir).map_err(CliError::Core)?);
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GenerateService::new(source, renderer, filesystem);

    // 3. Run the pipeline.
    let report = service
        .generate(&GenerateOptions {
            template_name,
            output_dir: output_dir.clone(),
            clean: args.clean,
            dry_run: args.dry_run,
        })
        .map_err(CliError::Core)?;

    // 4. Summary. Skips are already logged at error level by the service;
    //    the summary repeats the count so a piped run is still honest.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would write {} config(s) to {}",
            report.written.len(),
            output_dir.display(),
        ))?;
        if args.clean && report.cleaned > 0 {
            output.info(&format!(
                "Dry run: would remove {} stale config(s)",
                report.cleaned
            ))?;
        }
    } else {
        if report.cleaned > 0 {
            output.print(&format!("Removed {} stale config(s)", report.cleaned))?;
        }
        output.success(&format!(
            "Wrote {} config(s) to {}",
            report.written.len(),
            output_dir.display(),
        ))?;
    }

    if !report.skipped.is_empty() {
        output.warning(&format!(
            "Skipped {} site(s): {}",
            report.skipped.len(),
            report.skipped.join(", "),
        ))?;
    }

    Ok(())
}
