//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATUM_` prefix, `__` between sections,
//!    e.g. `STRATUM_TOOL__EXECUTABLE=/opt/dotnet/dotnet`
//! 3. Config file (TOML): `--config FILE` (must exist) or the platform config
//!    dir (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stratum_core::domain::DEFAULT_TOOL;

use crate::error::{CliError, CliResult};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STRATUM";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The external project-management tool.
    pub tool: ToolConfig,
    /// Default values for new solutions.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub executable: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_TOOL.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Parent directory used when `--dir` is not given.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when given it
    /// must exist. Otherwise the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => Self::file_source(path).required(true),
            None => Self::file_source(&Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })?;

        config
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stratum.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stratum", "stratum")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stratum.toml"))
    }

    /// Look up a dotted key, rendered for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "tool.executable" => Some(self.tool.executable.clone()),
            "defaults.directory" => Some(
                self.defaults
                    .directory
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// All keys accepted by [`Self::get`].
    pub const KEYS: [&'static str; 4] = [
        "tool.executable",
        "defaults.directory",
        "output.no_color",
        "output.format",
    ];

    fn file_source(path: &Path) -> File<config::FileSourceFile, FileFormat> {
        File::from(path).format(FileFormat::Toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_tool_is_dotnet() {
        assert_eq!(AppConfig::default().tool.executable, "dotnet");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stratum.toml");
        std::fs::write(
            &path,
            "[tool]\nexecutable = \"/opt/dotnet/dotnet\"\n\n[defaults]\ndirectory = \"/srv/src\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.tool.executable, "/opt/dotnet/dotnet");
        assert_eq!(cfg.defaults.directory, Some(PathBuf::from("/srv/src")));
        // untouched sections keep their defaults
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stratum.toml");
        std::fs::write(&path, "[tool\nexecutable = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("tool.executable").as_deref(), Some("dotnet"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("defaults.directory").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
        assert!(AppConfig::KEYS.iter().all(|k| cfg.get(k).is_some()));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
