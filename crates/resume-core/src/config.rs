//! Layered configuration.
//!
//! Precedence, lowest to highest:
//! 1. Built-in defaults
//! 2. Global file: `<config_dir>/resume-core/config.toml`
//! 3. Explicit file passed by the caller
//! 4. Environment: `RESUME_CORE_LOG_LEVEL`, `RESUME_CORE_LOG_ANSI`
//!
//! Files are read into [`PartialConfig`], so a key absent from a file never
//! resets what a lower layer set.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub const ENV_LOG_LEVEL: &str = "RESUME_CORE_LOG_LEVEL";
pub const ENV_LOG_ANSI: &str = "RESUME_CORE_LOG_ANSI";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

// ═══════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG TYPES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    /// Colour the output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Config with every field optional, as read from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub log: Option<PartialLogConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialLogConfig {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub ansi: Option<bool>,
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Load every layer from the real environment.
    ///
    /// A missing global file is skipped. A missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a file cannot be read or parsed, or a value
    /// fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let global = global_config_path();
        Self::load_layered(global.as_deref(), explicit, |key| std::env::var(key).ok())
    }

    /// Load with explicit file locations and an environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_layered(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = global {
            match load_partial_toml_file(path) {
                Ok(partial) => config.merge_partial(partial),
                Err(e) if e.is_missing_file() => {}
                Err(e) => return Err(e),
            }
        }

        if let Some(path) = explicit {
            config.merge_partial(load_partial_toml_file(path)?);
        }

        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Override only the keys present in `partial`.
    pub fn merge_partial(&mut self, partial: PartialConfig) {
        if let Some(log) = partial.log {
            self.log.merge_partial(log);
        }
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = env(ENV_LOG_LEVEL) {
            self.log.level = value;
        }

        if let Some(value) = env(ENV_LOG_ANSI) {
            self.log.ansi = parse_bool(&value).ok_or_else(|| {
                ConfigError::invalid(ENV_LOG_ANSI, format!("'{value}' is not a boolean"))
            })?;
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown log level.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let level = self.log.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "log.level",
                format!(
                    "'{}' is not one of {}",
                    self.log.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }
        self.log.level = level;
        Ok(())
    }
}

impl LogConfig {
    fn merge_partial(&mut self, partial: PartialLogConfig) {
        if let Some(level) = partial.level {
            self.level = level;
        }
        if let Some(ansi) = partial.ansi {
            self.ansi = ansi;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Path of the per-user config file, if a home directory is known.
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "resume-core")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Read one TOML file into a [`PartialConfig`].
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read,
/// `ConfigError::Parse` for malformed TOML or unknown keys, and
/// `ConfigError::InvalidValue` if the file is too large.
pub fn load_partial_toml_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_error)?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::invalid(
            path.display().to_string(),
            format!("config file exceeds {MAX_CONFIG_FILE_SIZE} bytes"),
        ));
    }

    let content = fs::read_to_string(path).map_err(io_error)?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
