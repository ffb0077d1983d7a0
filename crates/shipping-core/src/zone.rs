//! Shipping zones.

use crate::error::Result;
use crate::ids::ZoneId;
use crate::money::Money;
use crate::weight::{Weight, MILLI_PER_UNIT};
use serde::{Deserialize, Serialize};

/// A named shipping-cost bracket keyed by exact postal codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingZone {
    /// Unique identifier.
    pub id: ZoneId,
    /// Display label shown at checkout.
    pub zone_name: String,
    /// Postal codes belonging to this zone. Matched verbatim.
    #[serde(default)]
    pub postal_codes: Vec<String>,
    /// Flat cost for any parcel shipped to this zone.
    pub base_rate: Money,
    /// Cost added per whole unit of parcel weight.
    pub per_unit_weight_rate: Money,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Money,
    /// Human-readable estimate, e.g. "3-5 days".
    pub delivery_estimate: String,
}

impl ShippingZone {
    /// Create a zone with no postal codes.
    pub fn new(
        id: impl Into<ZoneId>,
        zone_name: impl Into<String>,
        base_rate: Money,
        per_unit_weight_rate: Money,
        free_shipping_threshold: Money,
        delivery_estimate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            zone_name: zone_name.into(),
            postal_codes: Vec::new(),
            base_rate,
            per_unit_weight_rate,
            free_shipping_threshold,
            delivery_estimate: delivery_estimate.into(),
        }
    }

    /// Set the postal codes covered by this zone.
    pub fn with_postal_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.postal_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `postal_code` is listed by this zone.
    ///
    /// No trimming, case folding, prefix or range matching.
    pub fn covers(&self, postal_code: &str) -> bool {
        self.postal_codes.iter().any(|code| code == postal_code)
    }

    /// Weight-proportional part of the cost.
    pub fn weight_cost(&self, weight: Weight) -> Result<Money> {
        if weight.is_whole() {
            self.per_unit_weight_rate
                .checked_mul(weight.milli_units() / MILLI_PER_UNIT)
        } else {
            self.per_unit_weight_rate
                .checked_mul_ratio(weight.milli_units(), MILLI_PER_UNIT)
        }
    }

    /// `base_rate + per_unit_weight_rate * weight`, before any free-shipping
    /// adjustment.
    pub fn base_shipping_cost(&self, weight: Weight) -> Result<Money> {
        self.base_rate.checked_add(&self.weight_cost(weight)?)
    }
}
