//! Single-crop proposals: what the farm would earn growing one crop all year.
//!
//! Unlike the rotation model, these are back-of-the-envelope projections with
//! no land sharing and no demand cap. They exist to give the farmer a quick
//! ranking to sanity-check the rotation schedule against.
use super::schedule::round_dp;
use crate::crop::CropMap;
use crate::demand::DemandMap;
use crate::farm::Farm;
use crate::units::{MoneyPerMass, SQUARE_METRES_PER_HECTARE};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// Days in the projection year
const DAYS_PER_YEAR: u32 = 365;

/// Proposals are truncated to the most profitable crops
const MAX_PROPOSALS: usize = 10;

/// An annual projection for growing a single crop on the whole farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleCropProposal {
    /// The crop being projected
    pub crop: String,
    /// Length of one growing cycle in days
    pub cycle_days: u32,
    /// Complete cycles that fit in a year
    pub cycles_per_year: u32,
    /// Production of one cycle over the whole farm, in kg
    pub production_per_cycle_kg: f64,
    /// Production over all cycles in the year, in kg
    pub annual_production_kg: f64,
    /// Mean market price in €/kg
    pub unit_price: f64,
    /// Profit over the year in €
    pub annual_profit: f64,
    /// Average monthly production in kg
    pub monthly_production_kg: f64,
    /// Average monthly profit in €
    pub monthly_profit: f64,
    /// The farm area the projection assumes, in hectares
    pub area_ha: f64,
}

/// Project annual production and profit for each crop with market demand.
///
/// Every crop in the catalog that has a demand record, a usable yield and a
/// positive cycle length gets a projection; eligibility conditions such as
/// water and climate are deliberately not applied here. The result is sorted
/// by annual profit, best first, and truncated to the top [`MAX_PROPOSALS`].
pub fn propose_single_crops(
    crops: &CropMap,
    demand: &DemandMap,
    farm: &Farm,
    unit_cost: MoneyPerMass,
) -> Vec<SingleCropProposal> {
    let area_m2 = farm.area.value();

    crops
        .values()
        .filter_map(|crop| {
            let summary = demand.get(&crop.id)?;
            let yield_per_hectare = crop.yield_per_hectare.filter(|y| *y > 0.0)?;

            if crop.cycle_days == 0 {
                warn!("Crop {} has a zero-day cycle; skipping projection", crop.id);
                return None;
            }

            let cycles_per_year = DAYS_PER_YEAR / crop.cycle_days;
            let production_per_cycle =
                yield_per_hectare / SQUARE_METRES_PER_HECTARE * area_m2;
            let annual_production = production_per_cycle * f64::from(cycles_per_year);
            let annual_profit =
                (summary.mean_price - unit_cost).value() * annual_production;

            Some(SingleCropProposal {
                crop: crop.id.to_string(),
                cycle_days: crop.cycle_days,
                cycles_per_year,
                production_per_cycle_kg: round_dp(production_per_cycle, 2),
                annual_production_kg: round_dp(annual_production, 2),
                unit_price: round_dp(summary.mean_price.value(), 2),
                annual_profit: round_dp(annual_profit, 2),
                monthly_production_kg: round_dp(annual_production / 12.0, 2),
                monthly_profit: round_dp(annual_profit / 12.0, 2),
                area_ha: round_dp(farm.area.to_hectares(), 4),
            })
        })
        .sorted_by(|a, b| b.annual_profit.total_cmp(&a.annual_profit))
        .take(MAX_PROPOSALS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::aggregate_demand;
    use crate::fixture::{crops, demand_entries, farm};
    use float_cmp::assert_approx_eq;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    fn test_propose_single_crops(crops: CropMap, farm: Farm) {
        let demand = aggregate_demand(&demand_entries());
        let proposals = propose_single_crops(&crops, &demand, &farm, MoneyPerMass(0.30));

        // Apio has no yield and Cebolla no demand; the rest are projected
        // regardless of water or climate constraints
        assert_eq!(proposals.len(), 3);
        assert!(proposals
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.annual_profit >= b.annual_profit));

        // Tomate: 90-day cycle gives 4 cycles of 5000 kg on one hectare
        let tomate = proposals.iter().find(|p| p.crop == "Tomate").unwrap();
        assert_eq!(tomate.cycles_per_year, 4);
        assert_approx_eq!(f64, tomate.production_per_cycle_kg, 5000.0);
        assert_approx_eq!(f64, tomate.annual_production_kg, 20000.0);
        assert_approx_eq!(f64, tomate.annual_profit, 14000.0);
        assert_approx_eq!(f64, tomate.monthly_profit, 1166.67);
        assert_approx_eq!(f64, tomate.area_ha, 1.0);
    }

    #[rstest]
    fn test_propose_single_crops_truncates(farm: Farm) {
        let crops: CropMap = (0..15)
            .map(|n| {
                let crop = crate::fixture::catalog_crop(
                    &format!("Cultivo{n}"),
                    "mediterraneo",
                    Some(10000.0),
                    60,
                );
                (crop.id.clone(), crop)
            })
            .collect();
        let entries: Vec<_> = crops
            .keys()
            .map(|id| crate::demand::DemandEntry {
                product: id.clone(),
                quantity: crate::units::Mass(100.0),
                unit_price: MoneyPerMass(1.0),
            })
            .collect();

        let demand = aggregate_demand(&entries);
        let proposals = propose_single_crops(&crops, &demand, &farm, MoneyPerMass(0.30));
        assert_eq!(proposals.len(), MAX_PROPOSALS);
    }

    #[rstest]
    fn test_propose_single_crops_empty_demand(crops: CropMap, farm: Farm) {
        let proposals =
            propose_single_crops(&crops, &DemandMap::new(), &farm, MoneyPerMass(0.30));
        assert!(proposals.is_empty());
    }
}
