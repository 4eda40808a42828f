//! Configuration management for the wtbe tools.
//!
//! Parses `wtbe.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wtbe.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override CTA shortcode enablement.
    pub cta: Option<bool>,
    /// Override placeholder shortcode enablement.
    pub placeholder: Option<bool>,
    /// Override document source directory.
    pub source_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shortcode rendering configuration.
    pub render: RenderConfig,
    /// Document source configuration.
    pub docs: DocsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Shortcode rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether the CTA shortcode is expanded.
    pub cta: bool,
    /// Whether the placeholder shortcode is expanded.
    pub placeholder: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cta: true,
            placeholder: true,
        }
    }
}

/// Document source configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Base directory for resolving relative document paths.
    pub source_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `wtbe.toml` in the current directory and parents,
    /// falling back to the defaults when no file exists.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Load and parse a specific config file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for a config file in `dir` and its parents.
    #[must_use]
    pub fn discover_from(dir: &Path) -> Option<PathBuf> {
        let mut current = dir.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(cta) = settings.cta {
            self.render.cta = cta;
        }
        if let Some(placeholder) = settings.placeholder {
            self.render.placeholder = placeholder;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs.source_dir = Some(source_dir.clone());
        }
    }

    /// Resolve a document path against the configured source directory.
    ///
    /// Absolute paths and paths without a configured source directory are
    /// returned unchanged.
    #[must_use]
    pub fn resolve_document(&self, path: &Path) -> PathBuf {
        match &self.docs.source_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
