//! # Configuration
//!
//! Optional TOML configuration for the binary.
//!
//! ## Lookup order
//!
//! 1. Path given with `--config` (must exist)
//! 2. `./primal.toml` (used if present)
//! 3. Compiled-in defaults
//!
//! Environment overrides are applied last: `PRIMAL_CACHE_CAPACITY` replaces
//! `[engine] cache_capacity`. `PRIMAL_LOG_FORMAT` selects the log formatter
//! and is read before any file is loaded.
//!
//! ## Example
//!
//! ```toml
//! [engine]
//! cache_capacity = 50000
//!
//! [limits]
//! max_sieve_limit = 1000000
//! max_favored_count = 500
//!
//! [server]
//! host = "0.0.0.0"
//! port = 9090
//! ```
//!
//! Limits in the file can only lower the compiled-in ceilings.

use primal_core::PrimalError;
use primal_core::primitives::{DEFAULT_CACHE_CAPACITY, Limits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "primal.toml";

pub const CACHE_CAPACITY_ENV: &str = "PRIMAL_CACHE_CAPACITY";
pub const LOG_FORMAT_ENV: &str = "PRIMAL_LOG_FORMAT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// `[limits]` section. Missing keys keep the compiled-in bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sieve_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mersenne_exponent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_favored_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_analysis_length: Option<usize>,
}

impl LimitsConfig {
    /// Resolve against the defaults, never exceeding them.
    pub fn resolve(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_sieve_limit: self.max_sieve_limit.unwrap_or(defaults.max_sieve_limit),
            max_mersenne_exponent: self
                .max_mersenne_exponent
                .unwrap_or(defaults.max_mersenne_exponent),
            max_favored_count: self.max_favored_count.unwrap_or(defaults.max_favored_count),
            max_analysis_length: self
                .max_analysis_length
                .unwrap_or(defaults.max_analysis_length),
        }
        .clamped()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// =============================================================================
// ROOT CONFIG
// =============================================================================

/// Complete binary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimalConfig {
    pub engine: EngineConfig,
    pub limits: LimitsConfig,
    pub server: ServerConfig,
}

impl PrimalConfig {
    /// Parse configuration text.
    pub fn from_toml_str(contents: &str) -> Result<Self, PrimalError> {
        toml::from_str(contents).map_err(|e| PrimalError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, PrimalError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PrimalError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| PrimalError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Resolve configuration from an explicit path, the default file, or
    /// defaults, then apply environment overrides.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PrimalError> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)?
                } else {
                    tracing::debug!("no configuration file, using defaults");
                    Self::default()
                }
            }
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, PrimalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CACHE_CAPACITY_ENV) {
            self.engine.cache_capacity = raw.trim().parse().map_err(|_| {
                PrimalError::Config(format!("{CACHE_CAPACITY_ENV} must be an integer, got {raw:?}"))
            })?;
            tracing::debug!(
                cache_capacity = self.engine.cache_capacity,
                "cache capacity overridden from environment"
            );
        }
        Ok(self)
    }

    /// Effective limits.
    pub fn limits(&self) -> Limits {
        self.limits.resolve()
    }
}

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Log output format selected by `PRIMAL_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else is text.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

// =============================================================================
// TESTS
// =============================================================================
