//! Filtering of the crop catalog against the farm's constraints.
use crate::crop::{Crop, CropMap};
use crate::demand::DemandMap;
use crate::farm::Farm;
use log::debug;

/// Narrow the catalog to crops compatible with the farm and with market demand.
///
/// A crop is a candidate when its water need does not exceed the farm's water
/// access, it grows in the farm's climate zone (skipped entirely in flexible
/// mode), it appears in the demand data and the catalog gives it a strictly
/// positive yield.
///
/// This is a pure function and an empty result is a normal outcome, not a
/// fault: it means nothing can be recommended under the given constraints.
pub fn filter_candidates<'a>(crops: &'a CropMap, farm: &Farm, demand: &DemandMap) -> Vec<&'a Crop> {
    let candidates: Vec<_> = crops
        .values()
        .filter(|crop| is_candidate(crop, farm, demand))
        .collect();

    debug!(
        "{} of {} catalog crops are candidates",
        candidates.len(),
        crops.len()
    );

    candidates
}

/// Whether a single crop passes all eligibility conditions
fn is_candidate(crop: &Crop, farm: &Farm, demand: &DemandMap) -> bool {
    if crop.water_need > farm.water_access {
        debug!("Crop {} needs more water than the farm has", crop.id);
        return false;
    }

    if !farm.flexible_zone && crop.climate_zone != farm.climate_zone {
        debug!("Crop {} is outside climate zone {}", crop.id, farm.climate_zone);
        return false;
    }

    if !demand.contains_key(&crop.id) {
        debug!("Crop {} has no market demand", crop.id);
        return false;
    }

    // Catalog rows without a usable yield cannot be planned
    if !crop.yield_per_hectare.is_some_and(|y| y > 0.0) {
        debug!("Crop {} has no usable yield", crop.id);
        return false;
    }

    true
}
