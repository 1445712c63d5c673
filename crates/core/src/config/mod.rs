//! Library configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SAFE_SEARCH_*)
//! 2. TOML config file (if SAFE_SEARCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Library configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SAFE_SEARCH_*)
/// 2. TOML config file (if SAFE_SEARCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the backing cache document.
    ///
    /// Set via SAFE_SEARCH_CACHE_PATH environment variable.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Whether the cached-fallback pipeline is active.
    ///
    /// Hosts that cannot support the caching layer set this to false and get
    /// plain passthrough searches instead. Set via
    /// SAFE_SEARCH_FALLBACK_ENABLED environment variable.
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
}

fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("safe-search").join("cache.json"))
        .unwrap_or_else(|| PathBuf::from("./safe-search-cache.json"))
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { cache_path: default_cache_path(), fallback_enabled: true }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SAFE_SEARCH_`
    /// 2. TOML file from `SAFE_SEARCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SAFE_SEARCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("SAFE_SEARCH_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.fallback_enabled);
        assert!(config.cache_path.file_name().unwrap().to_string_lossy().ends_with("cache.json"));
    }

    #[test]
    fn test_default_path_names_the_library() {
        let config = AppConfig::default();
        assert!(config.cache_path.to_string_lossy().contains("safe-search"));
    }
}
