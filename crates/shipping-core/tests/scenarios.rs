//! Checkout quote scenarios against the public API.

use shipping_core::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn scenario_zone() -> ShippingZone {
    ShippingZone::new("z1", "Zone 1", usd(50), usd(10), usd(500), "3-5 days")
        .with_postal_codes(["10001"])
}

#[test]
fn below_threshold_pays_base_and_weight() {
    let query = ShippingQuery::new("10001")
        .with_subtotal(usd(100))
        .with_weight(Weight::units(2));

    let decision = resolve_shipping(&[scenario_zone()], &[], &query).unwrap();

    assert_eq!(decision.base_shipping_cost, usd(70));
    assert!(!decision.is_free_shipping);
    assert_eq!(decision.final_shipping_cost, usd(70));
    assert_eq!(decision.delivery_estimate, "3-5 days");
}

#[test]
fn threshold_reached_ships_free() {
    let query = ShippingQuery::new("10001")
        .with_subtotal(usd(500))
        .with_weight(Weight::units(2));

    let decision = resolve_shipping(&[scenario_zone()], &[], &query).unwrap();

    assert!(decision.is_free_shipping);
    assert_eq!(decision.final_shipping_cost, usd(0));
    assert_eq!(decision.base_shipping_cost, usd(70));
}

#[test]
fn unknown_postal_code_gets_fallback() {
    let decision =
        resolve_shipping(&[scenario_zone()], &[], &ShippingQuery::new("99999")).unwrap();

    assert_eq!(decision.matched_zone_name, None);
    assert_eq!(decision.base_shipping_cost, usd(300));
    assert_eq!(decision.final_shipping_cost, usd(300));
    assert!(!decision.is_free_shipping);
    assert_eq!(decision.delivery_estimate, "10-15 days");
}

#[test]
fn empty_zone_list_gets_fallback() {
    let decision = resolve_shipping(&[], &[], &ShippingQuery::new("10001")).unwrap();
    assert!(decision.is_fallback());
    assert_eq!(decision.final_shipping_cost, usd(300));
}

#[test]
fn first_listed_zone_wins_on_overlap() {
    let first = ShippingZone::new("a", "First", usd(10), usd(0), usd(1000), "1 day")
        .with_postal_codes(["20002", "20003"]);
    let second = ShippingZone::new("b", "Second", usd(99), usd(0), usd(1000), "9 days")
        .with_postal_codes(["20002"]);

    let query = ShippingQuery::new("20002");
    let decision = resolve_shipping(&[first.clone(), second.clone()], &[], &query).unwrap();
    assert_eq!(decision.matched_zone_name.as_deref(), Some("First"));

    let decision = resolve_shipping(&[second, first], &[], &query).unwrap();
    assert_eq!(decision.matched_zone_name.as_deref(), Some("Second"));
}

#[test]
fn methods_are_priced_on_top_of_free_shipping() {
    let methods = vec![
        ShippingMethod::new("express", "Express", usd(1500), "1-2 days"),
        ShippingMethod::new("std", "Standard", usd(0), "5-7 days"),
    ];
    let query = ShippingQuery::new("10001").with_subtotal(usd(900));

    let decision = resolve_shipping(&[scenario_zone()], &methods, &query).unwrap();

    let totals: Vec<_> = decision
        .available_methods
        .iter()
        .map(|q| (q.method.id.as_str(), q.total_cost))
        .collect();
    assert_eq!(
        totals,
        vec![("express", Some(usd(1500))), ("std", Some(usd(0)))]
    );
    assert_eq!(decision.cheapest_method().unwrap().method.id.as_str(), "std");
}

#[test]
fn legacy_fallback_leaves_methods_unpriced() {
    let methods = vec![ShippingMethod::new("express", "Express", usd(1500), "1-2 days")];
    let resolver = ShippingRateResolver::new(
        ResolverConfig::default().with_fallback_methods(FallbackMethodPolicy::Passthrough),
    );

    let decision = resolver
        .resolve(&[scenario_zone()], &methods, &ShippingQuery::new("99999"))
        .unwrap();

    assert_eq!(decision.available_methods.len(), 1);
    assert_eq!(decision.available_methods[0].method, methods[0]);
    assert_eq!(decision.available_methods[0].total_cost, None);
}

#[test]
fn custom_fallback_configuration() {
    let config: ResolverConfig = serde_json::from_str(
        r#"{"fallback_rate_cents": 950, "fallback_estimate": "2-3 weeks"}"#,
    )
    .unwrap();
    let resolver = ShippingRateResolver::new(config);

    let decision = resolver
        .resolve(&[], &[], &ShippingQuery::new("00000"))
        .unwrap();

    assert_eq!(decision.final_shipping_cost, usd(950));
    assert_eq!(decision.delivery_estimate, "2-3 weeks");
}

#[test]
fn decision_serializes_for_checkout() {
    let query = ShippingQuery::new("10001").with_weight(Weight::units(2));
    let decision = resolve_shipping(&[scenario_zone()], &[], &query).unwrap();

    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["matched_zone_name"], "Zone 1");
    assert_eq!(json["final_shipping_cost"]["amount_cents"], 70);
    assert_eq!(json["is_free_shipping"], false);
}

#[test]
fn unknown_postal_code_in_euro_store_gets_fallback() {
    let eur = |cents| Money::new(cents, Currency::EUR);
    let zone = ShippingZone::new("eu", "Paris", eur(50), eur(10), eur(500), "2-4 days")
        .with_postal_codes(["75001"]);
    let methods = vec![
        ShippingMethod::new("std", "Standard", eur(0), "5 days"),
        ShippingMethod::new("express", "Express", eur(900), "1-2 days"),
    ];

    let decision = resolve_shipping(&[zone], &methods, &ShippingQuery::new("99999")).unwrap();

    assert!(decision.is_fallback());
    assert_eq!(decision.final_shipping_cost, eur(300));
    assert_eq!(decision.method_total(&"std".into()), Some(eur(300)));
    assert_eq!(decision.method_total(&"express".into()), Some(eur(1200)));
}

#[test]
fn overflowing_rates_are_reported() {
    let zone = ShippingZone::new("z", "Bulk", usd(0), usd(i64::MAX), usd(500), "1 day")
        .with_postal_codes(["10001"]);
    let query = ShippingQuery::new("10001").with_weight(Weight::units(2));

    assert_eq!(
        resolve_shipping(&[zone], &[], &query),
        Err(ShippingError::Overflow)
    );

    let methods = vec![ShippingMethod::new("x", "Charter", usd(i64::MAX), "now")];
    assert_eq!(
        resolve_shipping(&[scenario_zone()], &methods, &ShippingQuery::new("10001")),
        Err(ShippingError::Overflow)
    );
}
