//! Code for working with market demand.
//!
//! Demand comes in as one row per purchase; the planner works with per-product
//! aggregates (total quantity bought and mean unit price).
use crate::crop::CropID;
use crate::units::{Mass, MoneyPerMass};
use indexmap::IndexMap;

/// A single purchase record from the demand dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DemandEntry {
    /// The product bought, named the same as the corresponding crop
    pub product: CropID,
    /// The quantity bought, in kg
    pub quantity: Mass,
    /// The price paid per kg
    pub unit_price: MoneyPerMass,
}

/// Aggregated demand for a single product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandSummary {
    /// Total quantity bought across all purchases, in kg
    pub total_quantity: Mass,
    /// Mean unit price across all purchases
    pub mean_price: MoneyPerMass,
}

/// A map of [`DemandSummary`]s, keyed by product
pub type DemandMap = IndexMap<CropID, DemandSummary>;

/// Aggregate purchase records into per-product totals and mean prices
pub fn aggregate_demand(entries: &[DemandEntry]) -> DemandMap {
    let mut totals: IndexMap<CropID, (f64, f64, u32)> = IndexMap::new();
    for entry in entries {
        let (quantity, price_sum, count) = totals.entry(entry.product.clone()).or_default();
        *quantity += entry.quantity.value();
        *price_sum += entry.unit_price.value();
        *count += 1;
    }

    totals
        .into_iter()
        .map(|(product, (quantity, price_sum, count))| {
            let summary = DemandSummary {
                total_quantity: Mass(quantity),
                mean_price: MoneyPerMass(price_sum / f64::from(count)),
            };
            (product, summary)
        })
        .collect()
}
