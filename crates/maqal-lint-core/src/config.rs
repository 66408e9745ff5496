//! Configuration loading and discovery.
//!
//! Discovers configuration by:
//! 1. Walking up from the working directory to find project config
//! 2. Loading user config from the platform config directory
//! 3. Merging with defaults, then `MAQAL_LINT_*` environment variables
//!
//! # Config file locations (in order of precedence, highest first):
//! - `maqal-lint.toml` in the working directory or any parent
//! - `.maqal-lint.toml` in the working directory or any parent
//! - `~/.config/maqal-lint/config.toml` (user config)

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The configuration for maqal-lint.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Default minimum human-style score for the `check` command gate.
    pub min_human_score: Option<f64>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default; use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Config file names searched in each directory (low→high precedence).
const CONFIG_FILE_NAMES: &[&str] = &[".maqal-lint.toml", "maqal-lint.toml"];

/// Application name for the platform config directory lookup.
const APP_NAME: &str = "maqal-lint";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the platform config directory.
    include_user_config: bool,
    /// Stop searching when a directory contains this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for `--config` or tests).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/maqal-lint/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest): environment variables, explicit
    /// files, project config (closest to the search root), user config,
    /// defaults.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<Config> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = figment.merge(Toml::file(user_config.as_std_path()));
        }

        if let Some(ref root) = self.project_search_root {
            for pc in self.find_project_configs(root) {
                figment = figment.merge(Toml::file(pc.as_std_path()));
            }
        }

        for file in &self.explicit_files {
            figment = figment.merge(Toml::file(file.as_std_path()));
        }

        // MAQAL_LINT_LOG_LEVEL=debug, MAQAL_LINT_MIN_HUMAN_SCORE=60, ...
        figment = figment.merge(Env::prefixed("MAQAL_LINT_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok(config)
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns the matches from the closest directory that has any,
    /// ordered low→high precedence (figment merges last-wins).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .filter(|p| p.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker AFTER config files, so a config
            // next to the marker is still found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Locate the user config file, if present.
    fn find_user_config() -> Option<Utf8PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let path = dirs.config_dir().join("config.toml");
        let path = Utf8PathBuf::from_path_buf(path).ok()?;
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_without_discovery() -> ConfigLoader {
        let mut loader = ConfigLoader::new().with_user_config(false);
        loader.boundary_marker = None;
        loader
    }

    #[test]
    fn defaults_when_nothing_found() {
        let config = loader_without_discovery().load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.min_human_score, None);
        assert!(!config.disable_input_limit);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_level = \"warn\"\nmin_human_score = 65.0\n").unwrap();

        let config = loader_without_discovery()
            .with_file(Utf8PathBuf::from_path_buf(path).unwrap())
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.min_human_score, Some(65.0));
    }

    #[test]
    fn project_config_discovered_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::write(root.join("maqal-lint.toml"), "max_input_bytes = 1024\n").unwrap();
        let nested = root.join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();
        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn dotfile_yields_to_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::write(root.join(".maqal-lint.toml"), "min_human_score = 40.0\n").unwrap();
        std::fs::write(root.join("maqal-lint.toml"), "min_human_score = 55.0\n").unwrap();

        let config = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .load()
            .unwrap();
        assert_eq!(config.min_human_score, Some(55.0));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();

        let result = loader_without_discovery()
            .with_file(Utf8PathBuf::from_path_buf(path).unwrap())
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
