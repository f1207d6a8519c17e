//! The crop rotation recommendation pipeline.
//!
//! The pipeline runs in four stages: aggregate the demand records, filter the
//! catalog down to candidate crops, derive economic parameters for the
//! candidates and solve the land-rotation allocation problem. The solved
//! allocation is then materialised into a planting schedule.
use crate::crop::CropMap;
use crate::demand::{aggregate_demand, DemandEntry};
use crate::farm::Farm;
use crate::units::MoneyPerMass;
use log::info;

pub mod economics;
pub mod eligibility;
pub mod monoculture;
pub mod optimisation;
pub mod schedule;

use economics::build_economics;
use eligibility::filter_candidates;
use optimisation::{solve_allocation, SolveStatus};
use schedule::{materialise, round_dp, ScheduleRow};

/// The result of a rotation recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The recommended plantings; empty when `status` is not optimal
    pub schedule: Vec<ScheduleRow>,
    /// The solver's verdict
    pub status: SolveStatus,
    /// Total expected profit over the year in €, rounded to the cent
    pub total_profit: f64,
}

/// Recommend a planting schedule for the farm.
///
/// # Arguments
///
/// * `crops` - The crop catalog
/// * `demand_entries` - Raw demand records
/// * `farm` - The farm profile
/// * `unit_cost` - Flat production cost per kg, applied to all crops
pub fn recommend_rotation(
    crops: &CropMap,
    demand_entries: &[DemandEntry],
    farm: &Farm,
    unit_cost: MoneyPerMass,
) -> Recommendation {
    let demand = aggregate_demand(demand_entries);
    let candidates = filter_candidates(crops, farm, &demand);
    if candidates.is_empty() {
        info!("No candidate crops for this farm; nothing to recommend");
        return Recommendation {
            schedule: Vec::new(),
            status: SolveStatus::NoSolution,
            total_profit: 0.0,
        };
    }

    let economics = build_economics(&candidates, &demand, unit_cost);
    let allocation = solve_allocation(&economics, &demand, farm.area);
    let schedule = materialise(&allocation, &economics);

    Recommendation {
        schedule,
        status: allocation.status,
        total_profit: round_dp(allocation.objective.value(), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::ClimateZone;
    use crate::crop::CropID;
    use crate::fixture::{crops, demand_entries, farm};
    use crate::month::Month;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    /// One hectare of Tomate demand is well within the land available, so the
    /// whole demand is planted and the profit is demand times margin
    #[rstest]
    fn test_recommend_rotation(crops: CropMap, farm: Farm) {
        let recommendation =
            recommend_rotation(&crops, &demand_entries(), &farm, MoneyPerMass(0.30));

        assert_eq!(recommendation.status, SolveStatus::Optimal);
        assert_approx_eq!(f64, recommendation.total_profit, 7000.0, epsilon = 0.01);

        assert!(recommendation
            .schedule
            .iter()
            .all(|row| row.crop == CropID::new("Tomate") && row.quantity_kg > 0.0));

        let total_quantity: f64 = recommendation
            .schedule
            .iter()
            .map(|row| row.quantity_kg)
            .sum();
        assert!(total_quantity <= 10000.0 + 0.01);
        assert_approx_eq!(f64, total_quantity, 10000.0, epsilon = 0.01);
    }

    /// Land occupancy holds for every calendar month of the schedule
    #[rstest]
    fn test_recommend_rotation_land_fits(crops: CropMap, farm: Farm) {
        let demand = aggregate_demand(&demand_entries());
        let candidates = filter_candidates(&crops, &farm, &demand);
        let economics = build_economics(&candidates, &demand, MoneyPerMass(0.30));

        let recommendation =
            recommend_rotation(&crops, &demand_entries(), &farm, MoneyPerMass(0.30));

        for month in Month::iter_all() {
            let occupied_ha: f64 = recommendation
                .schedule
                .iter()
                .filter(|row| {
                    row.month
                        .occupied_window(economics[&row.crop].occupancy_months)
                        .any(|occupied| occupied == month)
                })
                .map(|row| row.area_ha)
                .sum();
            assert!(occupied_ha <= farm.area.to_hectares() + 1e-4);
        }
    }

    /// A farm in a zone with no compatible crops gets an empty recommendation
    #[rstest]
    fn test_recommend_rotation_no_candidates(crops: CropMap, farm: Farm) {
        let farm = Farm {
            climate_zone: ClimateZone::new("continental"),
            ..farm
        };

        let recommendation =
            recommend_rotation(&crops, &demand_entries(), &farm, MoneyPerMass(0.30));

        assert_eq!(recommendation.status, SolveStatus::NoSolution);
        assert_eq!(recommendation.status.to_string(), "no solution");
        assert!(recommendation.schedule.is_empty());
        assert_approx_eq!(f64, recommendation.total_profit, 0.0);
    }
}
