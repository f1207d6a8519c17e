//! Code for reading the province equivalence table.
use super::read_csv;
use crate::climate::{ClimateEquivalence, ClimateZone, ClimateZoneMap, ProvinceID};
use anyhow::{ensure, Result};
use serde::Deserialize;
use std::path::Path;

const CLIMATE_ZONES_FILE_NAME: &str = "climate_zones.csv";

/// A row of the province equivalence file
#[derive(Debug, Clone, Deserialize)]
struct ClimateRaw {
    province: String,
    equivalent_province: String,
    climate_zone: ClimateZone,
}

/// Read the equivalence table from an iterator of raw rows
fn read_climate_zones_from_iter<I>(iter: I) -> Result<ClimateZoneMap>
where
    I: Iterator<Item = ClimateRaw>,
{
    let mut map = ClimateZoneMap::new();
    for raw in iter {
        let province = ProvinceID::new(raw.province.trim());
        let equivalence = ClimateEquivalence {
            province: province.clone(),
            equivalent_province: ProvinceID::new(raw.equivalent_province.trim()),
            climate_zone: raw.climate_zone,
        };

        ensure!(
            map.insert(province.clone(), equivalence).is_none(),
            "Duplicate entry for province {province}"
        );
    }

    Ok(map)
}

/// Read the province equivalence file.
///
/// # Arguments
///
/// * `farm_dir` - Folder containing the farm's data files
pub fn read_climate_zones(farm_dir: &Path) -> Result<ClimateZoneMap> {
    let file_path = farm_dir.join(CLIMATE_ZONES_FILE_NAME);
    read_climate_zones_from_iter(read_csv(&file_path)?.into_iter())
}
