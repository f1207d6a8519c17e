//! Code for reading the farm profile.
use super::read_toml;
use crate::climate::ClimateZoneMap;
use crate::crop::{SoilType, WaterLevel};
use crate::farm::Farm;
use crate::units::Area;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

const FARM_FILE_NAME: &str = "farm.toml";

/// Represents the contents of the entire farm profile file
#[derive(Debug, Deserialize, PartialEq)]
struct FarmFile {
    farm: FarmRaw,
}

/// The `[farm]` section of the farm profile file
#[derive(Debug, Deserialize, PartialEq)]
struct FarmRaw {
    area_ha: f64,
    soil: SoilType,
    water_access: WaterLevel,
    province: String,
    #[serde(default)]
    flexible_zone: bool,
}

/// Validate the raw profile and resolve its province to a climate zone
fn farm_from_raw(raw: FarmRaw, climate_zones: &ClimateZoneMap) -> Result<Farm> {
    ensure!(
        raw.area_ha > 0.0,
        "Farm area must be positive, got {} ha",
        raw.area_ha
    );

    let equivalence = climate_zones.get(raw.province.trim()).with_context(|| {
        format!(
            "Province '{}' is not in the climate zone table",
            raw.province
        )
    })?;

    Ok(Farm {
        area: Area::from_hectares(raw.area_ha),
        soil: raw.soil,
        water_access: raw.water_access,
        province: equivalence.province.clone(),
        climate_zone: equivalence.climate_zone.clone(),
        flexible_zone: raw.flexible_zone,
    })
}

/// Read the farm profile file.
///
/// # Arguments
///
/// * `farm_dir` - Folder containing the farm's data files
/// * `climate_zones` - The province equivalence table
pub fn read_farm(farm_dir: &Path, climate_zones: &ClimateZoneMap) -> Result<Farm> {
    let file_path = farm_dir.join(FARM_FILE_NAME);
    let farm_file: FarmFile = read_toml(&file_path)?;

    farm_from_raw(farm_file.farm, climate_zones)
}
