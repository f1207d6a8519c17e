//! Conversion of a raw solver allocation into the planting schedule.
use super::economics::EconomicsMap;
use super::optimisation::Allocation;
use crate::crop::CropID;
use crate::month::Month;
use crate::units::SQUARE_METRES_PER_HECTARE;
use serde::{Deserialize, Serialize};

/// One planting in the recommended schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// The crop to plant
    pub crop: CropID,
    /// The month in which to plant it
    pub month: Month,
    /// Quantity to plant in kg, rounded to two decimal places
    pub quantity_kg: f64,
    /// Expected profit from this planting in €, rounded to two decimal places
    pub profit: f64,
    /// Land this planting occupies in hectares, rounded to four decimal places
    pub area_ha: f64,
}

/// Round `value` to `dp` decimal places
pub(crate) fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10.0_f64.powi(dp);
    (value * factor).round() / factor
}

/// Turn a solved allocation into schedule rows.
///
/// Plantings with zero quantity are dropped; the remaining rows keep the
/// solver's ordering, which groups rows by crop and sorts months within each
/// crop. Quantities and profits are reported to the cent and areas to four
/// decimal places of a hectare.
pub fn materialise(allocation: &Allocation, economics: &EconomicsMap) -> Vec<ScheduleRow> {
    allocation
        .quantities
        .iter()
        .filter(|(_, _, quantity)| *quantity > 0.0)
        .map(|(crop_id, month, quantity)| {
            let crop = &economics[crop_id];
            let area_m2 = quantity / crop.land_yield().value();

            ScheduleRow {
                crop: crop_id.clone(),
                month: *month,
                quantity_kg: round_dp(*quantity, 2),
                profit: round_dp(crop.profit_per_kg.value() * quantity, 2),
                area_ha: round_dp(area_m2 / SQUARE_METRES_PER_HECTARE, 4),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::economics::CropEconomics;
    use crate::recommendation::optimisation::SolveStatus;
    use crate::units::{MassPerArea, Money, MoneyPerMass};
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    fn allocation(quantities: Vec<(CropID, Month, f64)>) -> Allocation {
        Allocation {
            quantities,
            status: SolveStatus::Optimal,
            objective: Money(0.0),
        }
    }

    fn tomate_economics() -> EconomicsMap {
        let economics = CropEconomics {
            profit_per_kg: MoneyPerMass(0.7),
            yield_per_area: MassPerArea(5.0),
            occupancy_months: 3,
        };
        std::iter::once((CropID::new("Tomate"), economics)).collect()
    }

    #[rstest]
    #[case(1234.5678, 2, 1234.57)]
    #[case(1234.5678, 4, 1234.5678)]
    #[case(0.125, 2, 0.13)]
    #[case(-0.005, 2, -0.01)]
    fn test_round_dp(#[case] value: f64, #[case] dp: i32, #[case] expected: f64) {
        assert_approx_eq!(f64, round_dp(value, dp), expected);
    }

    #[test]
    fn test_materialise() {
        let crop_id = CropID::new("Tomate");
        let allocation = allocation(vec![(crop_id.clone(), Month::new(3).unwrap(), 1000.0)]);

        let rows = materialise(&allocation, &tomate_economics());
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.crop, crop_id);
        assert_eq!(row.month, Month::new(3).unwrap());
        assert_approx_eq!(f64, row.quantity_kg, 1000.0);
        assert_approx_eq!(f64, row.profit, 700.0);

        // 1000 kg at 5 kg/m² occupies 200 m²
        assert_approx_eq!(f64, row.area_ha, 0.02);
    }

    /// Pairs the solver left at zero do not appear in the schedule
    #[test]
    fn test_materialise_drops_zero_rows() {
        let crop_id = CropID::new("Tomate");
        let allocation = allocation(vec![
            (crop_id.clone(), Month::new(1).unwrap(), 0.0),
            (crop_id.clone(), Month::new(2).unwrap(), 500.0),
            (crop_id, Month::new(3).unwrap(), 0.0),
        ]);

        let rows = materialise(&allocation, &tomate_economics());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].month, Month::new(2).unwrap());
    }
}
