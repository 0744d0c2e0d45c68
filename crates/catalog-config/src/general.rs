//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default number of rows printed by list/search commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::invalid(
                "general.default_limit",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_rejected() {
        let config = GeneralConfig { default_limit: 0 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.default_limit"
        ));
    }
}
