//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and defaults' documentation.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// vhostgen is a single-command tool: every invocation runs one generation
/// pass, so the generation flags sit directly on the top level.
#[derive(Debug, Parser)]
#[command(
    name    = "vhostgen",
    bin_name = "vhostgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render reverse-proxy virtual-host configs from a domains file",
    long_about = "vhostgen renders one nginx-style virtual-host configuration \
                  file per site defined in a YAML domains file, through a \
                  Jinja2-style template.",
    after_help = "EXAMPLES:\n\
        \x20 vhostgen\n\
        \x20 vhostgen -d config/domains.yml -o nginx/sites-enabled --clean\n\
        \x20 vhostgen -t config/templates --template-name site.conf.j2 -v\n\
        \x20 vhostgen --dry-run --clean"
)]
pub struct Cli {
    /// Global flags (verbosity, colour, config file).
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Generation flags.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── Generation flags ──────────────────────────────────────────────────────────

/// Flags controlling one generation pass.
///
/// Path-like flags are optional here; unset ones fall back to the layered
/// configuration (env, config file, built-in defaults) in
/// [`crate::config::AppConfig`].
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the YAML domains file.
    #[arg(
        short = 'd',
        long = "domains-config",
        value_name = "FILE",
        help = "Path to domains YAML file [default: config/domains.yml]"
    )]
    pub domains_config: Option<PathBuf>,

    /// Directory containing the templates.
    #[arg(
        short = 't',
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory containing templates [default: config/templates]"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Directory to write rendered configs into.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory to write rendered configs [default: nginx/sites-enabled]"
    )]
    pub output_dir: Option<PathBuf>,

    /// Template filename within the templates directory.
    #[arg(
        long = "template-name",
        value_name = "NAME",
        help = "Template filename [default: site.conf.j2]"
    )]
    pub template_name: Option<String>,

    /// Remove any existing *.conf in the output directory before writing.
    ///
    /// The clean pass runs before validation, so a site that fails
    /// validation in this run loses its previously generated file.
    #[arg(long = "clean", help = "Remove existing *.conf in output dir first")]
    pub clean: bool,

    /// Validate and render without writing or deleting anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unset_so_config_can_fill_them() {
        let cli = Cli::parse_from(["vhostgen"]);
        assert!(cli.generate.domains_config.is_none());
        assert!(cli.generate.templates_dir.is_none());
        assert!(cli.generate.output_dir.is_none());
        assert!(cli.generate.template_name.is_none());
        assert!(!cli.generate.clean);
        assert!(!cli.generate.dry_run);
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::parse_from([
            "vhostgen", "-d", "dom.yml", "-t", "tpl", "-o", "out", "--clean",
        ]);
        assert_eq!(cli.generate.domains_config, Some(PathBuf::from("dom.yml")));
        assert_eq!(cli.generate.templates_dir, Some(PathBuf::from("tpl")));
        assert_eq!(cli.generate.output_dir, Some(PathBuf::from("out")));
        assert!(cli.generate.clean);
    }

    #[test]
    fn template_name_long_flag_parses() {
        let cli = Cli::parse_from(["vhostgen", "--template-name", "other.j2"]);
        assert_eq!(cli.generate.template_name.as_deref(), Some("other.j2"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["vhostgen", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["vhostgen", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
