//! Host-supplied configuration for core diagnostics.
//!
//! # Invariants
//! - `level` normalizes to one of `trace|debug|info|warn|error`.
//! - `log_dir` must be a non-empty absolute path.

use crate::logging::LoggingError;
use serde::Deserialize;
use std::path::PathBuf;

/// Logging configuration, deserializable from host settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum log level. Defaults to [`default_log_level`].
    #[serde(default = "default_level_string")]
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    /// Creates a config using the build-mode default level.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: log_dir.into(),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Returns the canonical level name.
    pub fn normalized_level(&self) -> Result<&'static str, LoggingError> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok("trace"),
            "debug" => Ok("debug"),
            "info" => Ok("info"),
            "warn" | "warning" => Ok("warn"),
            "error" => Ok("error"),
            other => Err(LoggingError::UnsupportedLevel(other.to_string())),
        }
    }

    /// Returns the validated log directory.
    pub fn normalized_log_dir(&self) -> Result<PathBuf, LoggingError> {
        let raw = self.log_dir.to_string_lossy();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoggingError::EmptyLogDir);
        }
        let path = PathBuf::from(trimmed);
        if !path.is_absolute() {
            return Err(LoggingError::RelativeLogDir(path));
        }
        Ok(path)
    }
}

/// Default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn default_level_string() -> String {
    default_log_level().to_string()
}
