//! Common routines for reading input data from a farm directory.
//!
//! A farm directory contains the crop catalog (`crops.csv`), client demand
//! (`demand.csv`), the province equivalence table (`climate_zones.csv`) and
//! the farm profile (`farm.toml`).
use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod climate;
pub mod crop;
pub mod demand;
pub mod farm;

use crate::crop::CropMap;
use crate::demand::DemandEntry;
use crate::farm::Farm;
use climate::read_climate_zones;
use crop::read_crops;
use demand::read_demand;
use farm::read_farm;

/// All input data for a planning run
pub struct Inputs {
    /// The crop catalog
    pub crops: CropMap,
    /// Client purchase records
    pub demand: Vec<DemandEntry>,
    /// The user's farm profile
    pub farm: Farm,
}

/// Read a series of type `T`s from a CSV file into a `Vec<T>`.
///
/// # Arguments
///
/// * `file_path`: Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T =
            result.with_context(|| format!("Error reading {}", file_path.display()))?;
        records.push(record);
    }

    ensure!(
        !records.is_empty(),
        "CSV file {} cannot be empty",
        file_path.display()
    );

    Ok(records)
}

/// Parse a TOML file at the specified path
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let contents = fs::read_to_string(file_path)
        .with_context(|| format!("Could not read {}", file_path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Error parsing {}", file_path.display()))
}

/// Load all input data from the specified farm directory.
///
/// # Arguments
///
/// * `farm_dir` - Folder containing the farm's data files
pub fn load_inputs(farm_dir: &Path) -> Result<Inputs> {
    let climate_zones = read_climate_zones(farm_dir)?;
    let farm = read_farm(farm_dir, &climate_zones)?;
    let crops = read_crops(farm_dir)?;
    let demand = read_demand(farm_dir)?;

    Ok(Inputs {
        crops,
        demand,
        farm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        value: f64,
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("records.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,value\na,1.0\nb,2.5").unwrap();
        }

        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            vec![
                Record {
                    id: "a".into(),
                    value: 1.0
                },
                Record {
                    id: "b".into(),
                    value: 2.5
                }
            ]
        );
    }

    #[test]
    fn test_read_csv_empty() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("records.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,value").unwrap();
        }

        assert!(read_csv::<Record>(&file_path).is_err());
    }
}
