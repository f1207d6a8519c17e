//! Derivation of per-crop economic parameters.
//!
//! These parameters translate catalog and demand data into the coefficients
//! the allocation model works with: profit per kg sold, yield per square metre
//! and the number of whole months a planting occupies the land.
use crate::crop::{Crop, CropID};
use crate::demand::DemandMap;
use crate::month::MONTHS_PER_YEAR;
use crate::units::{MassPerArea, MoneyPerMass, SQUARE_METRES_PER_HECTARE};
use indexmap::IndexMap;
use log::warn;

/// Days assumed per month when converting cycle length to land occupancy
pub const DAYS_PER_MONTH: u32 = 30;

/// Floor applied to yields wherever they are used as a divisor
pub const YIELD_FLOOR: f64 = 0.0001;

/// The derived economic parameters for one eligible crop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropEconomics {
    /// Profit per kg sold: mean market price minus the flat unit cost
    pub profit_per_kg: MoneyPerMass,
    /// Yield in kg per square metre
    pub yield_per_area: MassPerArea,
    /// Number of whole months one planting occupies the land
    pub occupancy_months: u32,
}

impl CropEconomics {
    /// The yield to divide by when converting a quantity into an area.
    ///
    /// Floored at [`YIELD_FLOOR`] so that a catalog yield of zero cannot
    /// produce a division by zero.
    pub fn land_yield(&self) -> MassPerArea {
        MassPerArea(self.yield_per_area.value().max(YIELD_FLOOR))
    }
}

/// A map of [`CropEconomics`], keyed by crop ID
pub type EconomicsMap = IndexMap<CropID, CropEconomics>;

/// Derive economic parameters for each candidate crop.
///
/// # Arguments
///
/// * `candidates` - The crops that survived eligibility filtering
/// * `demand` - Aggregated demand per product
/// * `unit_cost` - The flat production cost per kg, applied to all crops
pub fn build_economics(
    candidates: &[&Crop],
    demand: &DemandMap,
    unit_cost: MoneyPerMass,
) -> EconomicsMap {
    candidates
        .iter()
        .map(|crop| {
            let profit_per_kg = match demand.get(&crop.id) {
                Some(summary) => summary.mean_price - unit_cost,
                None => {
                    // Candidates are filtered on demand presence, so this only
                    // happens when calling with an unfiltered crop list
                    warn!("No demand records for crop {}; assuming zero profit", crop.id);
                    MoneyPerMass(0.0)
                }
            };

            let yield_per_area =
                MassPerArea(crop.yield_per_hectare.unwrap_or(0.0) / SQUARE_METRES_PER_HECTARE);

            let economics = CropEconomics {
                profit_per_kg,
                yield_per_area,
                occupancy_months: occupancy_months(crop),
            };

            (crop.id.clone(), economics)
        })
        .collect()
}

/// The number of whole months one planting of `crop` occupies the land.
///
/// Cycles longer than a year are clamped to twelve months: the planning
/// horizon is a single year and a longer occupancy would leave no feasible
/// start month at all.
fn occupancy_months(crop: &Crop) -> u32 {
    let months = crop.cycle_days.div_ceil(DAYS_PER_MONTH).max(1);
    if months > u32::from(MONTHS_PER_YEAR) {
        warn!(
            "Crop {} has a {}-day cycle; clamping occupancy to a full year",
            crop.id, crop.cycle_days
        );
        return u32::from(MONTHS_PER_YEAR);
    }

    months
}
