//! Code for reading client demand records.
use super::read_csv;
use crate::crop::CropID;
use crate::demand::DemandEntry;
use crate::units::{Mass, MoneyPerMass};
use anyhow::{ensure, Result};
use serde::Deserialize;
use std::path::Path;

const DEMAND_FILE_NAME: &str = "demand.csv";

/// A row of the demand file: one purchase by one client
#[derive(Debug, Clone, Deserialize)]
struct DemandRaw {
    product: String,
    quantity_kg: f64,
    unit_price: f64,
}

/// Read demand entries from an iterator of raw rows
fn read_demand_from_iter<I>(iter: I) -> Result<Vec<DemandEntry>>
where
    I: Iterator<Item = DemandRaw>,
{
    iter.map(|raw| {
        ensure!(
            raw.quantity_kg >= 0.0,
            "Negative quantity for product {}",
            raw.product
        );
        ensure!(
            raw.unit_price >= 0.0,
            "Negative unit price for product {}",
            raw.product
        );

        Ok(DemandEntry {
            product: CropID::new(raw.product.trim()),
            quantity: Mass(raw.quantity_kg),
            unit_price: MoneyPerMass(raw.unit_price),
        })
    })
    .collect()
}

/// Read the demand file.
///
/// # Arguments
///
/// * `farm_dir` - Folder containing the farm's data files
pub fn read_demand(farm_dir: &Path) -> Result<Vec<DemandEntry>> {
    let file_path = farm_dir.join(DEMAND_FILE_NAME);
    read_demand_from_iter(read_csv(&file_path)?.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;

    fn raw(product: &str, quantity_kg: f64, unit_price: f64) -> DemandRaw {
        DemandRaw {
            product: product.into(),
            quantity_kg,
            unit_price,
        }
    }

    #[test]
    fn test_read_demand_from_iter() {
        let entries =
            read_demand_from_iter([raw(" Tomate", 500.0, 1.1), raw("Tomate", 250.0, 0.9)].into_iter())
                .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].product, CropID::new("Tomate"));
        assert_eq!(entries[0].quantity, Mass(500.0));
    }

    #[test]
    fn test_read_demand_from_iter_negative_quantity() {
        assert_error!(
            read_demand_from_iter([raw("Tomate", -1.0, 1.0)].into_iter()),
            "Negative quantity for product Tomate"
        );
    }

    #[test]
    fn test_read_demand_from_iter_negative_price() {
        assert_error!(
            read_demand_from_iter([raw("Tomate", 1.0, -0.5)].into_iter()),
            "Negative unit price for product Tomate"
        );
    }
}
