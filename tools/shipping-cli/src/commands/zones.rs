//! Zone listing command.

use anyhow::Result;
use serde::Serialize;
use shipping_core::ShippingZone;

use super::ZonesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ZoneSummary<'a> {
    id: &'a str,
    name: &'a str,
    postal_codes: usize,
    base_rate: String,
    per_unit_weight_rate: String,
    free_shipping_threshold: String,
    delivery_estimate: &'a str,
}

impl<'a> From<&'a ShippingZone> for ZoneSummary<'a> {
    fn from(zone: &'a ShippingZone) -> Self {
        Self {
            id: zone.id.as_str(),
            name: &zone.zone_name,
            postal_codes: zone.postal_codes.len(),
            base_rate: zone.base_rate.display(),
            per_unit_weight_rate: zone.per_unit_weight_rate.display(),
            free_shipping_threshold: zone.free_shipping_threshold.display(),
            delivery_estimate: &zone.delivery_estimate,
        }
    }
}

/// Run the zones command.
pub async fn run(args: ZonesArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_rates().await?;

    let zones: Vec<&ShippingZone> = snapshot
        .zones
        .iter()
        .filter(|zone| args.postal_code.as_deref().map_or(true, |code| zone.covers(code)))
        .collect();

    if ctx.output.is_json() {
        let summaries: Vec<ZoneSummary<'_>> = zones.iter().map(|zone| (*zone).into()).collect();
        ctx.output.json(&summaries);
        return Ok(());
    }

    if zones.is_empty() {
        ctx.output.info("No shipping zones found.");
        return Ok(());
    }

    ctx.output.header(&format!("Shipping zones ({})", zones.len()));
    let widths = [10, 20, 6, 10, 10, 12, 12];
    ctx.output.table_row(
        &["ID", "Name", "Codes", "Base", "Per unit", "Free from", "Delivery"],
        &widths,
    );
    for zone in zones {
        let summary = ZoneSummary::from(zone);
        let codes = summary.postal_codes.to_string();
        ctx.output.table_row(
            &[
                summary.id,
                summary.name,
                codes.as_str(),
                summary.base_rate.as_str(),
                summary.per_unit_weight_rate.as_str(),
                summary.free_shipping_threshold.as_str(),
                summary.delivery_estimate,
            ],
            &widths,
        );
    }

    Ok(())
}
