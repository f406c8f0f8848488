//! Runtime configuration

use serde::Deserialize;

/// Runtime configuration for the demo process.
#[derive(Debug, Clone, Deserialize)]
pub struct CrmConfig {
    /// Log level filter: trace, debug, info, warn, error
    pub log_level: String,
    /// Whether to pre-populate the store with demo companies
    pub seed_demo_data: bool,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed_demo_data: true,
        }
    }
}

impl CrmConfig {
    /// Loads configuration from CRM_-prefixed environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("seed_demo_data", true)?
            .add_source(config::Environment::with_prefix("CRM").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrmConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo_data);
    }
}
