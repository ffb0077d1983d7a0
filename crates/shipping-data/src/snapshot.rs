//! Zones and methods loaded together.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use shipping_core::{Currency, Money, ShippingMethod, ShippingZone, ZoneId};

use crate::error::SourceError;

/// Zones and methods as read from the reference store, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    #[serde(default)]
    pub zones: Vec<ShippingZone>,
    #[serde(default)]
    pub methods: Vec<ShippingMethod>,
}

/// A postal code listed by more than one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalOverlap {
    pub postal_code: String,
    /// Zones listing the code, in snapshot order. The first one wins.
    pub zones: Vec<ZoneId>,
}

impl PostalOverlap {
    /// Zone the resolver will pick for this code.
    pub fn winner(&self) -> Option<&ZoneId> {
        self.zones.first()
    }
}

impl RateSnapshot {
    pub fn new(zones: Vec<ShippingZone>, methods: Vec<ShippingMethod>) -> Self {
        Self { zones, methods }
    }

    /// Methods eligible for quoting, in stored order.
    pub fn active_methods(&self) -> Vec<ShippingMethod> {
        self.methods
            .iter()
            .filter(|method| method.is_active)
            .cloned()
            .collect()
    }

    /// Currency the data is priced in, taken from the first zone or method.
    pub fn currency(&self) -> Option<Currency> {
        self.prices().next().map(|(_, _, money)| money.currency)
    }

    /// Every amount in the snapshot with its owner id and field name.
    fn prices(&self) -> impl Iterator<Item = (&str, &'static str, &Money)> {
        let zone_prices = self.zones.iter().flat_map(|zone| {
            [
                (zone.id.as_str(), "base_rate", &zone.base_rate),
                (zone.id.as_str(), "per_unit_weight_rate", &zone.per_unit_weight_rate),
                (zone.id.as_str(), "free_shipping_threshold", &zone.free_shipping_threshold),
            ]
        });
        let method_prices = self
            .methods
            .iter()
            .map(|method| (method.id.as_str(), "base_rate", &method.base_rate));
        zone_prices.chain(method_prices)
    }

    /// Every postal code claimed by two or more zones, ordered by first
    /// appearance.
    pub fn overlapping_postal_codes(&self) -> Vec<PostalOverlap> {
        let mut claims: HashMap<&str, Vec<ZoneId>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for zone in &self.zones {
            let mut seen_in_zone = HashSet::new();
            for code in &zone.postal_codes {
                if !seen_in_zone.insert(code.as_str()) {
                    continue;
                }
                let entry = claims.entry(code.as_str()).or_default();
                if entry.is_empty() {
                    order.push(code.as_str());
                }
                entry.push(zone.id.clone());
            }
        }

        order
            .into_iter()
            .filter_map(|code| {
                let zones = claims.remove(code)?;
                (zones.len() > 1).then(|| PostalOverlap {
                    postal_code: code.to_string(),
                    zones,
                })
            })
            .collect()
    }

    /// Check the reference data is usable.
    ///
    /// Rejects blank or duplicate ids, negative rates and amounts in more
    /// than one currency. Overlapping postal codes are allowed.
    pub fn validate(&self) -> Result<(), SourceError> {
        let mut zone_ids = HashSet::new();
        for zone in &self.zones {
            if zone.id.is_blank() {
                return Err(SourceError::InvalidData(format!(
                    "zone '{}' has an empty id",
                    zone.zone_name
                )));
            }
            if !zone_ids.insert(zone.id.as_str()) {
                return Err(SourceError::InvalidData(format!(
                    "duplicate zone id '{}'",
                    zone.id
                )));
            }
            for (field, money) in [
                ("base_rate", &zone.base_rate),
                ("per_unit_weight_rate", &zone.per_unit_weight_rate),
                ("free_shipping_threshold", &zone.free_shipping_threshold),
            ] {
                if money.is_negative() {
                    return Err(SourceError::InvalidData(format!(
                        "zone '{}' has negative {}",
                        zone.id, field
                    )));
                }
            }
        }

        let mut method_ids = HashSet::new();
        for method in &self.methods {
            if method.id.is_blank() {
                return Err(SourceError::InvalidData(format!(
                    "method '{}' has an empty id",
                    method.name
                )));
            }
            if !method_ids.insert(method.id.as_str()) {
                return Err(SourceError::InvalidData(format!(
                    "duplicate method id '{}'",
                    method.id
                )));
            }
            if method.base_rate.is_negative() {
                return Err(SourceError::InvalidData(format!(
                    "method '{}' has negative base_rate",
                    method.id
                )));
            }
        }

        if let Some(currency) = self.currency() {
            if let Some((id, field, money)) =
                self.prices().find(|(_, _, money)| money.currency != currency)
            {
                return Err(SourceError::InvalidData(format!(
                    "'{}' prices {} in {}, the rest of the data uses {}",
                    id, field, money.currency, currency
                )));
            }
        }

        Ok(())
    }
}
