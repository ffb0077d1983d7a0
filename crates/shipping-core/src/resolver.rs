//! Shipping rate resolution.
//!
//! [`ShippingRateResolver::resolve`] maps a snapshot of zones and active
//! methods plus a [`ShippingQuery`] to a [`PricingDecision`]. It performs no
//! I/O and keeps no state besides its configuration, so one resolver can be
//! shared freely across threads.

use crate::config::{FallbackMethodPolicy, ResolverConfig};
use crate::decision::{PricingDecision, QuotedMethod};
use crate::error::{Result, ShippingError};
use crate::method::ShippingMethod;
use crate::money::{Currency, Money};
use crate::query::ShippingQuery;
use crate::zone::ShippingZone;
use std::cmp::Ordering;
use tracing::debug;

/// Resolves shipping quotes against supplied reference data.
#[derive(Debug, Clone, Default)]
pub struct ShippingRateResolver {
    config: ResolverConfig,
}

impl ShippingRateResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// First zone, in supplied order, listing `postal_code` verbatim.
    pub fn match_zone<'a>(
        &self,
        zones: &'a [ShippingZone],
        postal_code: &str,
    ) -> Option<&'a ShippingZone> {
        zones.iter().find(|zone| zone.covers(postal_code))
    }

    /// Quote shipping for `query`.
    ///
    /// `methods` must already be filtered to active ones. An unmatched
    /// destination yields the fallback decision; errors are reserved for
    /// negative inputs, mixed currencies and overflow.
    pub fn resolve(
        &self,
        zones: &[ShippingZone],
        methods: &[ShippingMethod],
        query: &ShippingQuery,
    ) -> Result<PricingDecision> {
        validate_query(query)?;

        match self.match_zone(zones, &query.postal_code) {
            Some(zone) => self.quote_zone(zone, methods, query),
            None => self.fallback(zones, methods, &query.postal_code),
        }
    }

    fn quote_zone(
        &self,
        zone: &ShippingZone,
        methods: &[ShippingMethod],
        query: &ShippingQuery,
    ) -> Result<PricingDecision> {
        let weight = query.weight_or_default();
        let subtotal = query.subtotal_or_zero(zone.free_shipping_threshold.currency);

        let base_shipping_cost = zone.base_shipping_cost(weight)?;
        let is_free_shipping =
            subtotal.try_cmp(&zone.free_shipping_threshold)? != Ordering::Less;
        let final_shipping_cost = if is_free_shipping {
            Money::zero(base_shipping_cost.currency)
        } else {
            base_shipping_cost
        };

        debug!(
            postal_code = %query.postal_code,
            zone = %zone.id,
            weight = %weight,
            base_cents = base_shipping_cost.amount_cents,
            final_cents = final_shipping_cost.amount_cents,
            free = is_free_shipping,
            "matched shipping zone"
        );

        Ok(PricingDecision {
            matched_zone_name: Some(zone.zone_name.clone()),
            base_shipping_cost,
            final_shipping_cost,
            is_free_shipping,
            delivery_estimate: zone.delivery_estimate.clone(),
            available_methods: annotate(methods, &final_shipping_cost)?,
        })
    }

    /// Currency the fallback rate is quoted in: that of the supplied
    /// reference data, or the configured one when there is none.
    pub fn fallback_currency(&self, zones: &[ShippingZone], methods: &[ShippingMethod]) -> Currency {
        methods
            .first()
            .map(|method| method.base_rate.currency)
            .or_else(|| zones.first().map(|zone| zone.base_rate.currency))
            .unwrap_or(self.config.currency)
    }

    fn fallback(
        &self,
        zones: &[ShippingZone],
        methods: &[ShippingMethod],
        postal_code: &str,
    ) -> Result<PricingDecision> {
        let rate = self
            .config
            .fallback_rate_in(self.fallback_currency(zones, methods));

        debug!(
            postal_code = %postal_code,
            fallback_cents = rate.amount_cents,
            "no shipping zone covers destination, using fallback"
        );

        let available_methods = match self.config.fallback_methods {
            FallbackMethodPolicy::Annotate => methods
                .iter()
                .map(|method| {
                    // The fallback rate is a plain amount, so it is priced in
                    // each method's own currency.
                    let rate = Money::new(rate.amount_cents, method.base_rate.currency);
                    Ok(QuotedMethod {
                        method: method.clone(),
                        total_cost: Some(rate.checked_add(&method.base_rate)?),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            FallbackMethodPolicy::Passthrough => methods
                .iter()
                .map(|method| QuotedMethod {
                    method: method.clone(),
                    total_cost: None,
                })
                .collect(),
        };

        Ok(PricingDecision {
            matched_zone_name: None,
            base_shipping_cost: rate,
            final_shipping_cost: rate,
            is_free_shipping: false,
            delivery_estimate: self.config.fallback_estimate.clone(),
            available_methods,
        })
    }
}

/// Quote with the default configuration.
pub fn resolve_shipping(
    zones: &[ShippingZone],
    methods: &[ShippingMethod],
    query: &ShippingQuery,
) -> Result<PricingDecision> {
    ShippingRateResolver::default().resolve(zones, methods, query)
}

fn annotate(methods: &[ShippingMethod], shipping_cost: &Money) -> Result<Vec<QuotedMethod>> {
    methods
        .iter()
        .map(|method| {
            Ok(QuotedMethod {
                method: method.clone(),
                total_cost: Some(shipping_cost.checked_add(&method.base_rate)?),
            })
        })
        .collect()
}

fn validate_query(query: &ShippingQuery) -> Result<()> {
    if let Some(weight) = query.weight {
        if weight.is_negative() {
            return Err(ShippingError::Validation(format!(
                "parcel weight must not be negative (got {})",
                weight
            )));
        }
    }
    if let Some(subtotal) = query.subtotal {
        if subtotal.is_negative() {
            return Err(ShippingError::Validation(format!(
                "order subtotal must not be negative (got {})",
                subtotal.amount_cents
            )));
        }
    }
    Ok(())
}
