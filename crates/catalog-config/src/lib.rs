//! # catalog-config
//!
//! Layered configuration loading for the catalog workspace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CATALOG_*` prefix, `__` as separator)
//! 2. Project-level `.catalog/config.toml`
//! 3. User-level `~/.config/catalog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CATALOG_API__BASE_URL` -> `api.base_url`,
//! `CATALOG_SEARCH__DEBOUNCE_MS` -> `search.debounce_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use catalog_config::CatalogConfig;
//!
//! let config = CatalogConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.objects_url());
//! println!("debounce: {:?}", config.search.debounce());
//! ```

mod api;
mod error;
mod general;
mod search;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use search::SearchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every override.
pub const ENV_PREFIX: &str = "CATALOG_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CatalogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration, additionally merging a `.env`-style file at `path`.
    ///
    /// Values already present in the process environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".catalog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("catalog").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.search.filter_latency_ms, 2000);
        assert_eq!(config.search.idle_grace_ms, 3000);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = CatalogConfig::from_figment(&CatalogConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config.api.base_url, "https://api.restful-api.dev");
            assert_eq!(config.general.default_limit, 50);
            Ok(())
        });
    }
}
