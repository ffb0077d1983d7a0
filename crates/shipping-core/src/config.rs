//! Resolver configuration.

use crate::error::{Result, ShippingError};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// How methods are reported when no zone matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMethodPolicy {
    /// Annotate each method with `fallback rate + surcharge`, like a match.
    #[default]
    Annotate,
    /// Hand the methods back without a total, as older checkouts expect.
    Passthrough,
}

/// Settings for [`ShippingRateResolver`](crate::ShippingRateResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Currency of the fallback rate when no reference data is supplied.
    #[serde(default)]
    pub currency: Currency,

    /// Shipping charged when no zone covers the destination, in minor units.
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate_cents: i64,

    /// Estimate shown when no zone covers the destination.
    #[serde(default = "default_fallback_estimate")]
    pub fallback_estimate: String,

    #[serde(default)]
    pub fallback_methods: FallbackMethodPolicy,
}

fn default_fallback_rate() -> i64 {
    300
}

fn default_fallback_estimate() -> String {
    "10-15 days".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            fallback_rate_cents: default_fallback_rate(),
            fallback_estimate: default_fallback_estimate(),
            fallback_methods: FallbackMethodPolicy::default(),
        }
    }
}

impl ResolverConfig {
    /// The fallback rate in the configured currency.
    pub fn fallback_rate(&self) -> Money {
        self.fallback_rate_in(self.currency)
    }

    /// The fallback rate quoted in `currency`.
    pub fn fallback_rate_in(&self, currency: Currency) -> Money {
        Money::new(self.fallback_rate_cents, currency)
    }

    pub fn with_fallback_methods(mut self, policy: FallbackMethodPolicy) -> Self {
        self.fallback_methods = policy;
        self
    }

    /// Check the settings make sense.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_rate_cents < 0 {
            return Err(ShippingError::Config(format!(
                "fallback_rate_cents must not be negative (got {})",
                self.fallback_rate_cents
            )));
        }
        if self.fallback_estimate.trim().is_empty() {
            return Err(ShippingError::Config(
                "fallback_estimate must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.fallback_rate(), Money::new(300, Currency::USD));
        assert_eq!(config.fallback_estimate, "10-15 days");
        assert_eq!(config.fallback_methods, FallbackMethodPolicy::Annotate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"fallback_methods": "passthrough"}"#).unwrap();
        assert_eq!(config.fallback_methods, FallbackMethodPolicy::Passthrough);
        assert_eq!(config.fallback_rate_cents, 300);
    }

    #[test]
    fn test_rejects_negative_rate() {
        let config = ResolverConfig {
            fallback_rate_cents: -1,
            ..ResolverConfig::default()
        };
        assert!(matches!(config.validate(), Err(ShippingError::Config(_))));
    }

    #[test]
    fn test_rejects_blank_estimate() {
        let config = ResolverConfig {
            fallback_estimate: "  ".to_string(),
            ..ResolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
