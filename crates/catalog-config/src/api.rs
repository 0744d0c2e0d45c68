//! Remote catalog API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("https://api.restful-api.dev")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("catalog/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without the `/objects` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Listing endpoint, tolerant of a trailing slash on `base_url`.
    #[must_use]
    pub fn objects_url(&self) -> String {
        format!("{}/objects", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::invalid("api.base_url", "must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("expected an http(s) URL, got '{url}'"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
