//! Search pipeline timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_filter_latency_ms() -> u64 {
    2000
}

const fn default_idle_grace_ms() -> u64 {
    3000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiet period a term must survive before it is filtered.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Simulated backend latency applied to non-empty terms. `0` disables it.
    #[serde(default = "default_filter_latency_ms")]
    pub filter_latency_ms: u64,

    /// How long outputs stay live after the last subscriber detaches.
    #[serde(default = "default_idle_grace_ms")]
    pub idle_grace_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            filter_latency_ms: default_filter_latency_ms(),
            idle_grace_ms: default_idle_grace_ms(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn filter_latency(&self) -> Duration {
        Duration::from_millis(self.filter_latency_ms)
    }

    #[must_use]
    pub const fn idle_grace(&self) -> Duration {
        Duration::from_millis(self.idle_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert_eq!(config.filter_latency(), Duration::from_secs(2));
        assert_eq!(config.idle_grace(), Duration::from_secs(3));
    }
}
