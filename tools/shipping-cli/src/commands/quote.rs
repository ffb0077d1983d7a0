//! Shipping quote command.

use anyhow::{bail, Result};
use shipping_core::{Currency, Money, PricingDecision, ShippingQuery, ShippingRateResolver, Weight};

use super::QuoteArgs;
use crate::context::Context;
use crate::output::price_badge;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_rates().await?;
    let query = build_query(&args, ctx.quote_currency(&snapshot))?;

    let resolver = ShippingRateResolver::new(ctx.config.resolver.clone());
    let decision = resolver.resolve(&snapshot.zones, &snapshot.active_methods(), &query)?;

    if ctx.output.is_json() {
        ctx.output.json(&decision);
        return Ok(());
    }

    print_decision(&query, &decision, ctx);
    Ok(())
}

fn build_query(args: &QuoteArgs, currency: Currency) -> Result<ShippingQuery> {
    let mut query = ShippingQuery::new(args.postal_code.clone());

    if let Some(subtotal) = args.subtotal {
        if !subtotal.is_finite() {
            bail!("Subtotal must be a number, got {}", subtotal);
        }
        query = query.with_subtotal(Money::from_decimal(subtotal, currency));
    }
    if let Some(weight) = args.weight {
        if !weight.is_finite() {
            bail!("Weight must be a number, got {}", weight);
        }
        query = query.with_weight(Weight::from_decimal(weight));
    }

    Ok(query)
}

fn print_decision(query: &ShippingQuery, decision: &PricingDecision, ctx: &Context) {
    ctx.output.header(&format!("Shipping to {}", query.postal_code));

    match &decision.matched_zone_name {
        Some(zone) => ctx.output.kv("zone", zone),
        None => ctx.output.kv("zone", "(no zone, fallback rate)"),
    }
    ctx.output.kv("weight", &query.weight_or_default().to_string());
    ctx.output.kv("base cost", &decision.base_shipping_cost.display());
    ctx.output.kv("shipping", &price_badge(&decision.final_shipping_cost));
    ctx.output.kv("delivery", &decision.delivery_estimate);

    if decision.available_methods.is_empty() {
        ctx.output.info("No delivery methods available.");
        return;
    }

    ctx.output.header("Delivery methods");
    let widths = [20, 12, 12];
    ctx.output.table_row(&["Method", "Days", "Total"], &widths);
    for quoted in &decision.available_methods {
        let total = quoted
            .total_cost
            .map(|cost| price_badge(&cost))
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                quoted.method.name.as_str(),
                quoted.method.estimated_days.as_str(),
                total.as_str(),
            ],
            &widths,
        );
    }

    if let Some(cheapest) = decision.cheapest_method() {
        ctx.output.success(&format!("Cheapest: {}", cheapest.method.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(subtotal: Option<f64>, weight: Option<f64>) -> QuoteArgs {
        QuoteArgs {
            postal_code: "10001".to_string(),
            subtotal,
            weight,
        }
    }

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(&args(None, None), Currency::USD).unwrap();
        assert_eq!(query.subtotal, None);
        assert_eq!(query.weight, None);
    }

    #[test]
    fn test_build_query_converts_decimals() {
        let query = build_query(&args(Some(4.99), Some(2.5)), Currency::USD).unwrap();
        assert_eq!(query.subtotal, Some(Money::new(499, Currency::USD)));
        assert_eq!(query.weight, Some(Weight::from_milli_units(2500)));
    }

    #[test]
    fn test_build_query_rejects_nan() {
        assert!(build_query(&args(Some(f64::NAN), None), Currency::USD).is_err());
        assert!(build_query(&args(None, Some(f64::INFINITY)), Currency::USD).is_err());
    }
}
