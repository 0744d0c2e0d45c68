//! `.env` values flow through the figment provider chain.

use catalog_config::CatalogConfig;
use figment::Jail;

#[test]
fn dotenv_file_values_are_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file("test.env", "CATALOG_GENERAL__DEFAULT_LIMIT=13\n")?;
        let path = jail.directory().join("test.env");

        let config = CatalogConfig::load_with_dotenv_from(&path).expect("config loads");
        assert_eq!(config.general.default_limit, 13);
        Ok(())
    });
}

#[test]
fn missing_dotenv_file_is_ignored() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("does-not-exist.env");
        let config = CatalogConfig::load_with_dotenv_from(&path).expect("config loads");
        assert_eq!(config.search.debounce_ms, 500);
        Ok(())
    });
}
