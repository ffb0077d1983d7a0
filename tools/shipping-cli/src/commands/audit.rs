//! Rate data audit command.

use anyhow::{bail, Result};
use serde::Serialize;
use shipping_data::PostalOverlap;

use super::AuditArgs;
use crate::context::Context;

#[derive(Serialize)]
struct AuditReport {
    zones: usize,
    methods: usize,
    active_methods: usize,
    overlaps: Vec<PostalOverlap>,
}

/// Run the audit command.
///
/// Loading already rejects malformed data, so reaching the report means the
/// snapshot is valid; overlaps are reported as warnings.
pub async fn run(args: AuditArgs, ctx: &Context) -> Result<()> {
    let snapshot = ctx.load_rates().await?;

    let report = AuditReport {
        zones: snapshot.zones.len(),
        methods: snapshot.methods.len(),
        active_methods: snapshot.active_methods().len(),
        overlaps: snapshot.overlapping_postal_codes(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.header("Rate data audit");
        ctx.output.kv("zones", &report.zones.to_string());
        ctx.output.kv(
            "methods",
            &format!("{} ({} active)", report.methods, report.active_methods),
        );

        for overlap in &report.overlaps {
            let zones: Vec<&str> = overlap.zones.iter().map(|id| id.as_str()).collect();
            ctx.output.warn(&format!(
                "Postal code {} is listed by zones {}; '{}' wins",
                overlap.postal_code,
                zones.join(", "),
                overlap.winner().map_or("-", |id| id.as_str())
            ));
        }

        if report.overlaps.is_empty() {
            ctx.output.success("No overlapping postal codes");
        }
    }

    if args.strict && !report.overlaps.is_empty() {
        bail!("{} postal code(s) listed by several zones", report.overlaps.len());
    }

    Ok(())
}
