//! The farm profile: the user-supplied constraints for a planning run.
use crate::climate::{ClimateZone, ProvinceID};
use crate::crop::{SoilType, WaterLevel};
use crate::units::Area;

/// The constraints describing a farm, supplied once per planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Farm {
    /// Total land area available for planting, in square metres
    pub area: Area,
    /// The soil type of the plot.
    ///
    /// Informational only: soil compatibility is not enforced as a planning
    /// constraint.
    pub soil: SoilType,
    /// The level of water the farm has access to
    pub water_access: WaterLevel,
    /// The province where the plot is located
    pub province: ProvinceID,
    /// The climate zone resolved from the province equivalence table
    pub climate_zone: ClimateZone,
    /// Whether crops from other climate zones may be recommended
    pub flexible_zone: bool,
}
