use serde::Deserialize;
use sitekit_cart::PricingConfig;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub pricing: PricingRules,
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingRules {
    /// Tax rate applied at checkout, post-discount.
    pub tax_rate: f64,
    pub currency: String,
}

impl PricingRules {
    pub fn to_pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// Key prefix separating this deployment's records in the store.
    pub namespace: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Built-in defaults so a bare checkout works with no files present
            .set_default("pricing.tax_rate", 0.18)?
            .set_default("pricing.currency", "INR")?
            .set_default("storage.namespace", "sitekit")?
            // Optional configuration files, most specific last
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. SITEKIT__PRICING__TAX_RATE=0.05
            .add_source(config::Environment::with_prefix("SITEKIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = Config::load().unwrap();
        assert!((config.pricing.tax_rate - 0.18).abs() < f64::EPSILON);
        assert_eq!(config.storage.namespace, "sitekit");
    }

    #[test]
    fn test_pricing_rules_conversion() {
        let rules = PricingRules {
            tax_rate: 0.05,
            currency: "INR".to_string(),
        };
        let pricing = rules.to_pricing_config();
        assert!((pricing.tax_rate - 0.05).abs() < f64::EPSILON);
    }
}
