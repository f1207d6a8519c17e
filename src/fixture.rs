//! Fixtures and assertions shared between unit tests.
use crate::climate::{ClimateZone, ProvinceID};
use crate::crop::{Crop, CropID, CropMap, SoilType, WaterLevel};
use crate::demand::DemandEntry;
use crate::farm::Farm;
use crate::units::{Area, Mass, MoneyPerMass};
use rstest::fixture;

/// Assert that the top-level message of an error matches `err_msg`
macro_rules! assert_error {
    ($result:expr, $err_msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $err_msg
        )
    };
}
pub(crate) use assert_error;

/// Build a catalog crop with the given agronomic parameters
pub fn catalog_crop(
    name: &str,
    climate_zone: &str,
    yield_per_hectare: Option<f64>,
    cycle_days: u32,
) -> Crop {
    Crop {
        id: CropID::new(name),
        water_need: WaterLevel::Low,
        soil: SoilType::Loam,
        climate_zone: ClimateZone::new(climate_zone),
        yield_per_hectare,
        cycle_days,
    }
}

/// A small crop catalog covering every eligibility condition
#[fixture]
pub fn crops() -> CropMap {
    let entries = [
        ("Tomate", WaterLevel::Low, "mediterraneo", Some(50000.0), 90),
        ("Lechuga", WaterLevel::Medium, "atlantico", Some(30000.0), 60),
        (
            "Alcachofa",
            WaterLevel::High,
            "mediterraneo",
            Some(20000.0),
            240,
        ),
        ("Apio", WaterLevel::Medium, "mediterraneo", None, 120),
        ("Cebolla", WaterLevel::Low, "mediterraneo", Some(40000.0), 150),
    ];

    entries
        .into_iter()
        .map(|(name, water_need, zone, yield_per_hectare, cycle_days)| {
            let crop = Crop {
                water_need,
                ..catalog_crop(name, zone, yield_per_hectare, cycle_days)
            };
            (crop.id.clone(), crop)
        })
        .collect()
}

/// Demand records for every catalog crop except Cebolla.
///
/// The two Tomate entries total 10000 kg at a mean price of 1.00 €/kg.
#[fixture]
pub fn demand_entries() -> Vec<DemandEntry> {
    [
        ("Tomate", 6000.0, 1.10),
        ("Tomate", 4000.0, 0.90),
        ("Lechuga", 2000.0, 0.80),
        ("Alcachofa", 1500.0, 2.50),
        ("Apio", 500.0, 1.20),
    ]
    .into_iter()
    .map(|(product, quantity, unit_price)| DemandEntry {
        product: CropID::new(product),
        quantity: Mass(quantity),
        unit_price: MoneyPerMass(unit_price),
    })
    .collect()
}

/// A one-hectare Mediterranean farm with regular irrigation
#[fixture]
pub fn farm() -> Farm {
    Farm {
        area: Area::from_hectares(1.0),
        soil: SoilType::Loam,
        water_access: WaterLevel::Medium,
        province: ProvinceID::new("Murcia"),
        climate_zone: ClimateZone::new("mediterraneo"),
        flexible_zone: false,
    }
}
