//! Shipping quote output.

use crate::ids::ShippingMethodId;
use crate::method::ShippingMethod;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method offered for one quote, with its landed cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotedMethod {
    /// The method as supplied to the resolver.
    #[serde(flatten)]
    pub method: ShippingMethod,
    /// Final shipping cost plus the method surcharge. `None` only for
    /// fallback quotes built with the passthrough policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Money>,
}

/// Complete shipping quote for one destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingDecision {
    /// Name of the matched zone; `None` for the fallback quote.
    pub matched_zone_name: Option<String>,
    /// Zone base rate plus weight cost, before free-shipping adjustment.
    pub base_shipping_cost: Money,
    /// What the customer is charged for shipping.
    pub final_shipping_cost: Money,
    /// Whether the subtotal reached the zone threshold.
    pub is_free_shipping: bool,
    /// Delivery estimate shown at checkout.
    pub delivery_estimate: String,
    /// Methods in input order.
    pub available_methods: Vec<QuotedMethod>,
}

impl PricingDecision {
    /// True when no zone matched the destination.
    pub fn is_fallback(&self) -> bool {
        self.matched_zone_name.is_none()
    }

    /// Landed cost of a given method, if offered and annotated.
    pub fn method_total(&self, id: &ShippingMethodId) -> Option<Money> {
        self.available_methods
            .iter()
            .find(|quoted| &quoted.method.id == id)
            .and_then(|quoted| quoted.total_cost)
    }

    /// Annotated method with the lowest landed cost. Ties keep input order.
    pub fn cheapest_method(&self) -> Option<&QuotedMethod> {
        self.available_methods
            .iter()
            .filter_map(|quoted| quoted.total_cost.map(|cost| (cost.amount_cents, quoted)))
            .min_by_key(|(cents, _)| *cents)
            .map(|(_, quoted)| quoted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn quoted(id: &str, rate: i64, total: Option<i64>) -> QuotedMethod {
        QuotedMethod {
            method: ShippingMethod::new(id, id, usd(rate), "1-2 days"),
            total_cost: total.map(usd),
        }
    }

    fn decision(methods: Vec<QuotedMethod>) -> PricingDecision {
        PricingDecision {
            matched_zone_name: Some("Metro".to_string()),
            base_shipping_cost: usd(70),
            final_shipping_cost: usd(70),
            is_free_shipping: false,
            delivery_estimate: "3-5 days".to_string(),
            available_methods: methods,
        }
    }

    #[test]
    fn test_cheapest_method_keeps_first_on_tie() {
        let d = decision(vec![
            quoted("express", 500, Some(570)),
            quoted("std", 0, Some(70)),
            quoted("eco", 0, Some(70)),
        ]);
        assert_eq!(d.cheapest_method().unwrap().method.id.as_str(), "std");
    }

    #[test]
    fn test_method_total() {
        let d = decision(vec![quoted("express", 500, Some(570))]);
        assert_eq!(d.method_total(&"express".into()), Some(usd(570)));
        assert_eq!(d.method_total(&"missing".into()), None);
        assert!(!d.is_fallback());
    }

    #[test]
    fn test_unannotated_methods_are_skipped() {
        let d = decision(vec![quoted("std", 0, None)]);
        assert!(d.cheapest_method().is_none());
    }

    #[test]
    fn test_serialized_method_is_flat() {
        let d = decision(vec![quoted("std", 0, Some(70))]);
        let json = serde_json::to_value(&d).unwrap();
        let method = &json["available_methods"][0];
        assert_eq!(method["id"], "std");
        assert_eq!(method["total_cost"]["amount_cents"], 70);
    }
}
