//! The crop catalog: reference data about each crop that could be planted.
use crate::climate::ClimateZone;
use crate::id::define_id_type;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};

define_id_type! {CropID}

/// A map of [`Crop`]s, keyed by crop ID
pub type CropMap = IndexMap<CropID, Crop>;

/// The three-level ordinal scale for water.
///
/// The same scale describes both a crop's water need and a farm's water
/// access; a crop is compatible with a farm when its need does not exceed the
/// farm's access.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WaterLevel {
    /// Rain-fed or minimal irrigation
    #[strum(serialize = "bajo")]
    Low = 1,
    /// Regular irrigation
    #[strum(serialize = "medio")]
    Medium = 2,
    /// Abundant irrigation
    #[strum(serialize = "alto")]
    High = 3,
}

impl WaterLevel {
    /// The position of this level on the 1-3 ordinal scale
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl<'de> Deserialize<'de> for WaterLevel {
    fn deserialize<D>(deserialiser: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label: String = Deserialize::deserialize(deserialiser)?;
        label
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Unknown water level '{label}'")))
    }
}

/// The soil types distinguished by the crop catalog and the farm profile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum SoilType {
    /// Balanced "franco" soil
    #[string = "franco"]
    Loam,
    /// Heavy "arcilloso" soil
    #[string = "arcilloso"]
    Clay,
    /// Light "arenoso" soil
    #[string = "arenoso"]
    Sandy,
    /// "Franco-arcilloso" soil
    #[string = "franco-arcilloso"]
    ClayLoam,
    /// "Franco-arenoso" soil
    #[string = "franco-arenoso"]
    SandyLoam,
}

/// Reference data describing a single crop.
///
/// Loaded once per run from the crop catalog and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    /// The crop's name, which is also the join key against demand products
    pub id: CropID,
    /// How much water the crop needs
    pub water_need: WaterLevel,
    /// The soil type the catalog recommends for this crop.
    ///
    /// Informational only: soil compatibility is not enforced as a planning
    /// constraint.
    pub soil: SoilType,
    /// The climate zone the crop grows in
    pub climate_zone: ClimateZone,
    /// Average yield in kg per hectare, as given in the catalog (may be absent)
    pub yield_per_hectare: Option<f64>,
    /// Length of one growing cycle in days
    pub cycle_days: u32,
}
