//! Shipping quote queries.

use crate::money::{Currency, Money};
use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// A request for a shipping quote.
///
/// Omitted values fall back to a zero subtotal and a one-unit parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingQuery {
    /// Destination postal code, matched verbatim.
    pub postal_code: String,
    /// Order subtotal.
    #[serde(default)]
    pub subtotal: Option<Money>,
    /// Parcel weight.
    #[serde(default)]
    pub weight: Option<Weight>,
}

impl ShippingQuery {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            subtotal: None,
            weight: None,
        }
    }

    pub fn with_subtotal(mut self, subtotal: Money) -> Self {
        self.subtotal = Some(subtotal);
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Subtotal, or zero in `currency` when not supplied.
    pub fn subtotal_or_zero(&self, currency: Currency) -> Money {
        self.subtotal.unwrap_or_else(|| Money::zero(currency))
    }

    /// Weight, or one unit when not supplied.
    pub fn weight_or_default(&self) -> Weight {
        self.weight.unwrap_or_default()
    }
}
