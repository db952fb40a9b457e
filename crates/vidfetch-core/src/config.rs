use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/vidfetch/config.toml`.
///
/// Only tool behavior lives here. Argument values are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VidfetchConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Write logs to the XDG state directory instead of stderr.
    pub log_to_file: bool,
}

impl Default for VidfetchConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            log_to_file: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidfetch")?;
    Ok(xdg_dirs.get_config_home().join("vidfetch").join("config.toml"))
}

/// Load configuration from disk. A missing file yields the defaults; nothing
/// is written.
pub fn load() -> Result<VidfetchConfig> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<VidfetchConfig> {
    if !path.exists() {
        return Ok(VidfetchConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: VidfetchConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VidfetchConfig::default();
        assert!(cfg.log_filter.is_none());
        assert!(cfg.log_to_file);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            log_filter = "warn,vidfetch=trace"
            log_to_file = false
        "#;
        let cfg: VidfetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("warn,vidfetch=trace"));
        assert!(!cfg.log_to_file);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: VidfetchConfig = toml::from_str(r#"log_filter = "debug""#).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
        assert!(cfg.log_to_file);
    }

    #[test]
    fn missing_file_gives_defaults_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, VidfetchConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_to_file = \"sometimes\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
