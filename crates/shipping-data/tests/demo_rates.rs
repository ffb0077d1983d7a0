//! Loads the bundled demo rate file and quotes against it.

use shipping_core::{Currency, Money, ShippingQuery, ShippingRateResolver, Weight};
use shipping_data::{FileRateSource, RateSource};

fn demo_source() -> FileRateSource {
    FileRateSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/rates.json"))
}

#[test]
fn demo_rates_load() {
    let snapshot = demo_source().load().unwrap();
    assert_eq!(snapshot.zones.len(), 2);
    assert_eq!(snapshot.methods.len(), 3);

    let active: Vec<_> = snapshot
        .active_methods()
        .into_iter()
        .map(|m| m.id.into_inner())
        .collect();
    assert_eq!(active, vec!["standard", "express"]);
}

#[test]
fn demo_overlap_resolves_to_first_zone() {
    let snapshot = demo_source().load().unwrap();

    let overlaps = snapshot.overlapping_postal_codes();
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].postal_code, "20002");
    assert_eq!(overlaps[0].winner().map(|id| id.as_str()), Some("metro"));

    let decision = ShippingRateResolver::default()
        .resolve(
            &snapshot.zones,
            &snapshot.active_methods(),
            &ShippingQuery::new("20002"),
        )
        .unwrap();
    assert_eq!(decision.matched_zone_name.as_deref(), Some("Metro"));
}

#[test]
fn demo_quote_with_methods() {
    let snapshot = demo_source().load().unwrap();
    let query = ShippingQuery::new("20001")
        .with_subtotal(Money::new(1000, Currency::USD))
        .with_weight(Weight::units(4));

    let decision = ShippingRateResolver::default()
        .resolve(&snapshot.zones, &snapshot.active_methods(), &query)
        .unwrap();

    assert_eq!(decision.final_shipping_cost, Money::new(220, Currency::USD));
    assert_eq!(
        decision.method_total(&"express".into()),
        Some(Money::new(1720, Currency::USD))
    );
    assert_eq!(decision.method_total(&"courier".into()), None);
}
