//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `VHOSTGEN_*` environment variables
//! 3. Config file (TOML; `--config` or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration: the default paths a generation run uses when
/// the corresponding CLI flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Path to the YAML domains file.
    pub domains_config: PathBuf,
    /// Directory holding the templates.
    pub templates_dir: PathBuf,
    /// Destination directory for rendered configs.
    pub output_dir: PathBuf,
    /// Template filename within the templates directory.
    pub template_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            domains_config: PathBuf::from("config/domains.yml"),
            templates_dir: PathBuf::from("config/templates"),
            output_dir: PathBuf::from("nginx/sites-enabled"),
            template_name: "site.conf.j2".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given,
    /// the file must exist and parse.  Without it, the default location is
    /// read only if present.  `VHOSTGEN_*` environment variables override
    /// file values (e.g. `VHOSTGEN_OUTPUT_DIR`).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file_source = match config_file {
            Some(path) => config::File::from(path.clone()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let config = config::Config::builder()
            .set_default("domains_config", "config/domains.yml")?
            .set_default("templates_dir", "config/templates")?
            .set_default("output_dir", "nginx/sites-enabled")?
            .set_default("template_name", "site.conf.j2")?
            .add_source(file_source)
            .add_source(config::Environment::with_prefix("VHOSTGEN"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vhostgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vhostgen", "vhostgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vhostgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_match_documented_table() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.domains_config, PathBuf::from("config/domains.yml"));
        assert_eq!(cfg.templates_dir, PathBuf::from("config/templates"));
        assert_eq!(cfg.output_dir, PathBuf::from("nginx/sites-enabled"));
        assert_eq!(cfg.template_name, "site.conf.j2");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/vhostgen.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vhostgen.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "output_dir = \"generated\"").unwrap();
        writeln!(f, "template_name = \"vhost.j2\"").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("generated"));
        assert_eq!(cfg.template_name, "vhost.j2");
        // Untouched keys keep their defaults.
        assert_eq!(cfg.domains_config, PathBuf::from("config/domains.yml"));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vhostgen.toml");
        std::fs::write(&path, "output_dir = [not toml").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
