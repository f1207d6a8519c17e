//! Code for reading the crop catalog.
use super::read_csv;
use crate::climate::ClimateZone;
use crate::crop::{Crop, CropID, CropMap, SoilType, WaterLevel};
use anyhow::{ensure, Result};
use log::warn;
use serde::Deserialize;
use std::path::Path;

const CROPS_FILE_NAME: &str = "crops.csv";

/// A row of the crop catalog file
#[derive(Debug, Clone, Deserialize)]
struct CropRaw {
    name: String,
    water_need: Option<String>,
    soil: SoilType,
    climate_zone: ClimateZone,
    yield_per_hectare: Option<f64>,
    cycle_days: u32,
}

/// Read the crop catalog from an iterator of raw rows
fn read_crops_from_iter<I>(iter: I) -> Result<CropMap>
where
    I: Iterator<Item = CropRaw>,
{
    let mut crops = CropMap::new();
    for raw in iter {
        let id = CropID::new(raw.name.trim());
        let crop = Crop {
            id: id.clone(),
            water_need: parse_water_need(&id, raw.water_need.as_deref()),
            soil: raw.soil,
            climate_zone: raw.climate_zone,
            yield_per_hectare: raw.yield_per_hectare,
            cycle_days: raw.cycle_days,
        };

        ensure!(
            crops.insert(id.clone(), crop).is_none(),
            "Duplicate catalog entry for crop {id}"
        );
    }

    Ok(crops)
}

/// Parse the catalog's water need label.
///
/// Missing or unrecognised labels fall back to medium rather than failing the
/// run; the catalog is maintained by hand and this column is patchy.
fn parse_water_need(id: &CropID, label: Option<&str>) -> WaterLevel {
    let Some(label) = label.map(str::trim).filter(|label| !label.is_empty()) else {
        warn!("Crop {id} has no water need; assuming medium");
        return WaterLevel::Medium;
    };

    label.parse().unwrap_or_else(|_| {
        warn!("Crop {id} has unknown water need '{label}'; assuming medium");
        WaterLevel::Medium
    })
}

/// Read the crop catalog file.
///
/// # Arguments
///
/// * `farm_dir` - Folder containing the farm's data files
pub fn read_crops(farm_dir: &Path) -> Result<CropMap> {
    let file_path = farm_dir.join(CROPS_FILE_NAME);
    read_crops_from_iter(read_csv(&file_path)?.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use rstest::rstest;

    fn raw(name: &str, water_need: Option<&str>) -> CropRaw {
        CropRaw {
            name: name.into(),
            water_need: water_need.map(String::from),
            soil: SoilType::Loam,
            climate_zone: "mediterraneo".into(),
            yield_per_hectare: Some(50000.0),
            cycle_days: 90,
        }
    }

    #[test]
    fn test_read_crops_from_iter() {
        let crops =
            read_crops_from_iter([raw(" Tomate ", Some("bajo")), raw("Lechuga", Some("Alto"))].into_iter())
                .unwrap();

        assert_eq!(crops.len(), 2);
        let tomate = &crops[&CropID::new("Tomate")]; // name is trimmed
        assert_eq!(tomate.water_need, WaterLevel::Low);
        assert_eq!(crops[&CropID::new("Lechuga")].water_need, WaterLevel::High);
    }

    #[test]
    fn test_read_crops_from_iter_duplicate() {
        assert_error!(
            read_crops_from_iter([raw("Tomate", None), raw("Tomate", None)].into_iter()),
            "Duplicate catalog entry for crop Tomate"
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("a chorros"))]
    fn test_parse_water_need_defaults_to_medium(#[case] label: Option<&str>) {
        let id = CropID::new("Tomate");
        assert_eq!(parse_water_need(&id, label), WaterLevel::Medium);
    }
}
