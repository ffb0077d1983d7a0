//! Shipping method types.

use crate::ids::ShippingMethodId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A delivery-speed tier offered on top of the zone cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Unique identifier.
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Surcharge for choosing this method.
    pub base_rate: Money,
    /// Human-readable estimate, e.g. "1-2 days".
    pub estimated_days: String,
    /// Inactive methods are dropped by the data layer before resolution.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ShippingMethod {
    /// Create a new active shipping method.
    pub fn new(
        id: impl Into<ShippingMethodId>,
        name: impl Into<String>,
        base_rate: Money,
        estimated_days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            base_rate,
            estimated_days: estimated_days.into(),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Check if choosing this method adds nothing to the zone cost.
    pub fn is_free(&self) -> bool {
        self.base_rate.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_shipping_method() {
        let method = ShippingMethod::new(
            "express",
            "Express",
            Money::new(599, Currency::USD),
            "1-2 days",
        )
        .with_description("Next-day dispatch");

        assert!(method.is_active);
        assert!(!method.is_free());
        assert_eq!(method.description.as_deref(), Some("Next-day dispatch"));
    }

    #[test]
    fn test_standard_method_is_free() {
        let method = ShippingMethod::new("std", "Standard", Money::zero(Currency::USD), "5-7 days");
        assert!(method.is_free());
    }

    #[test]
    fn test_is_active_defaults_to_true() {
        let json = r#"{
            "id": "std",
            "name": "Standard",
            "base_rate": {"amount_cents": 0},
            "estimated_days": "5-7 days"
        }"#;
        let method: ShippingMethod = serde_json::from_str(json).unwrap();
        assert!(method.is_active);
        assert!(method.description.is_none());
    }
}
