//! Configuration for genpick
//!
//! Settings are read from environment variables with fallback defaults. Nothing
//! is persisted; command-line flags override the environment per invocation.
//!
//! # Environment Variables
//!
//! - `GENPICK_CONTEXT`: trigger context file - default: `<config dir>/genpick/context.toml`,
//!   or `./context.toml` when the platform has no config directory
//! - `GENPICK_SEARCH_THRESHOLD`: fuzzy search threshold in `[0, 1]` - default: "0.1"
//!
//! `GENPICK_LOG_LEVEL` and `GENPICK_LOG_JSON` belong to
//! [`LoggingConfig`](crate::util::LoggingConfig), which is set up before this
//! configuration is read.
//!
//! # Example
//!
//! ```no_run
//! use genpick::GenpickConfig;
//!
//! let config = GenpickConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::select::DEFAULT_THRESHOLD;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONTEXT_FILE_NAME: &str = "context.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenpickConfig {
    /// Trigger context the engine is built from
    pub context_path: PathBuf,

    /// Jaccard distance at or below which search results are kept
    pub search_threshold: f64,
}

impl Default for GenpickConfig {
    /// Loads `GENPICK_*` variables, falling back to defaults for missing or
    /// unparseable values
    fn default() -> Self {
        let context_path = env::var("GENPICK_CONTEXT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_context_path);

        let search_threshold = env::var("GENPICK_SEARCH_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_THRESHOLD);

        Self {
            context_path,
            search_threshold,
        }
    }
}

fn default_context_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("genpick").join(CONTEXT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONTEXT_FILE_NAME))
}

impl GenpickConfig {
    /// Strict variant of [`Default`] that reports malformed values
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = env::var("GENPICK_SEARCH_THRESHOLD") {
            config.search_threshold =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::ParseError {
                        field: "GENPICK_SEARCH_THRESHOLD".to_string(),
                        error: e.to_string(),
                    })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_context(mut self, path: impl Into<PathBuf>) -> Self {
        self.context_path = path.into();
        self
    }

    pub fn context_path(&self) -> &Path {
        &self.context_path
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.search_threshold) {
            return Err(ConfigError::ValidationFailed(format!(
                "Search threshold must be between 0 and 1, got {}",
                self.search_threshold
            )));
        }

        if self.context_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Context path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

}

impl fmt::Display for GenpickConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Genpick Configuration:")?;
        writeln!(f, "  Context: {}", self.context_path.display())?;
        writeln!(f, "  Search Threshold: {}", self.search_threshold)?;
        Ok(())
    }
}
