//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use catalog_config::{CatalogConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://localhost:9000"
timeout_secs = 3
user_agent = "catalog-test"
"#,
        )?;

        let config: CatalogConfig = Figment::from(Serialized::defaults(CatalogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "catalog-test");
        assert_eq!(config.api.objects_url(), "http://localhost:9000/objects");
        Ok(())
    });
}

#[test]
fn loads_search_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[search]
debounce_ms = 250
filter_latency_ms = 0
",
        )?;

        let config: CatalogConfig = Figment::from(Serialized::defaults(CatalogConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.filter_latency_ms, 0);
        // Unset fields keep their defaults.
        assert_eq!(config.search.idle_grace_ms, 3000);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".catalog")?;
        jail.create_file(
            ".catalog/config.toml",
            r"
[general]
default_limit = 7
",
        )?;

        let config = CatalogConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".catalog")?;
        jail.create_file(
            ".catalog/config.toml",
            r#"
[api]
base_url = "http://from-toml.local"
"#,
        )?;
        jail.set_env("CATALOG_API__BASE_URL", "http://from-env.local");

        let config = CatalogConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env.local");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("CATALOG_SEARCH__DEBOUNCE_MS", "120");
        jail.set_env("CATALOG_SEARCH__IDLE_GRACE_MS", "0");

        let config = CatalogConfig::load().expect("config loads");
        assert_eq!(config.search.debounce_ms, 120);
        assert_eq!(config.search.idle_grace_ms, 0);
        assert_eq!(config.search.filter_latency_ms, 2000);
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("CATALOG_SEARCH__DEBOUNCE_MSS", "1");

        let config: CatalogConfig = Figment::from(Serialized::defaults(CatalogConfig::default()))
            .merge(Env::prefixed("CATALOG_").split("__"))
            .extract()?;

        assert_eq!(config.search.debounce_ms, 500);
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CATALOG_API__BASE_URL", "not a url");

        let err = CatalogConfig::load().expect_err("validation should fail");
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"),
            "unexpected error: {err}"
        );
        Ok(())
    });
}

#[test]
fn malformed_number_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("CATALOG_SEARCH__DEBOUNCE_MS", "soon");

        let err = CatalogConfig::load().expect_err("extraction should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
