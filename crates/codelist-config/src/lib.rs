//! Configuration management for codelist.
//!
//! Parses `codelist.toml` with serde and provides auto-discovery of the
//! config file in parent directories. Everything is optional: without a
//! config file the CLI reads stdin and writes stdout.
//!
//! ```toml
//! [input]
//! path = "snippets/Main.java"
//!
//! [output]
//! path = "${SITE_DIR:-public}/main.html"
//! trailing_newline = false
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! CLI settings are applied on top via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `input.path` and `output.path` support:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "codelist.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the file to read code from.
    pub input_path: Option<PathBuf>,
    /// Override the file to write the fragment to.
    pub output_path: Option<PathBuf>,
    /// Override whether a newline follows the fragment.
    pub trailing_newline: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input section as written in TOML.
    #[serde(rename = "input")]
    input_raw: InputConfigRaw,
    /// Output section as written in TOML.
    #[serde(rename = "output")]
    output_raw: OutputConfigRaw,

    /// Resolved input configuration (set after loading).
    #[serde(skip)]
    pub input: InputConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputConfigRaw {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    trailing_newline: Option<bool>,
}

/// Where code is read from.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InputConfig {
    /// Source file. `None` means stdin.
    pub path: Option<PathBuf>,
}

/// Where and how the fragment is written.
#[derive(Debug, PartialEq, Eq)]
pub struct OutputConfig {
    /// Destination file. `None` means stdout.
    pub path: Option<PathBuf>,
    /// Whether a `\n` follows the closing `</ul>`.
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            trailing_newline: true,
        }
    }
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
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Absolute form of `path` for comparison.
///
/// Relative paths are taken against the current directory. The parent is
/// canonicalized when it exists, so `dir/./a` and a symlinked `dir/a` match
/// even if the file itself does not exist yet.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => std::fs::canonicalize(parent)
            .map(|dir| dir.join(name))
            .unwrap_or(absolute),
        _ => absolute,
    }
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `codelist.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the final settings are invalid.
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
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(path) = &settings.input_path {
            self.input.path = Some(path.clone());
        }
        if let Some(path) = &settings.output_path {
            self.output.path = Some(path.clone());
        }
        if let Some(trailing_newline) = settings.trailing_newline {
            self.output.trailing_newline = trailing_newline;
        }
    }

    /// Validate resolved values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when input and output name the same
    /// file, which would truncate the code before it is read.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(input), Some(output)) = (&self.input.path, &self.output.path)
            && normalize(input) == normalize(output)
        {
            return Err(ConfigError::Validation(format!(
                "input and output both point to {}",
                input.display()
            )));
        }
        Ok(())
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.input_raw.path {
            self.input_raw.path = Some(expand::expand_env(path, "input.path")?);
        }
        if let Some(ref path) = self.output_raw.path {
            self.output_raw.path = Some(expand::expand_env(path, "output.path")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |raw: Option<&str>, field: &str| -> Result<Option<PathBuf>, ConfigError> {
            raw.map(|path| {
                require_non_empty(path, field)?;
                Ok(config_dir.join(path))
            })
            .transpose()
        };

        self.input = InputConfig {
            path: resolve(self.input_raw.path.as_deref(), "input.path")?,
        };
        self.output = OutputConfig {
            path: resolve(self.output_raw.path.as_deref(), "output.path")?,
            trailing_newline: self.output_raw.trailing_newline.unwrap_or(true),
        };

        Ok(())
    }
}
