//! Climate zones and the province equivalence table.
//!
//! Users identify their location by province; the equivalence table maps each
//! province to an agronomically equivalent province and a climate zone, which
//! is what the crop catalog is keyed on.
use crate::id::define_id_type;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::rc::Rc;

define_id_type! {ProvinceID}

/// A climate zone label, normalised to lower case with surrounding whitespace removed.
///
/// Zone strings come from two independently maintained datasets (the crop
/// catalog and the province table), so comparison must be insensitive to
/// casing and stray whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClimateZone(Rc<str>);

impl ClimateZone {
    /// Create a climate zone from a raw label, normalising it
    pub fn new(label: &str) -> Self {
        Self(Rc::from(label.trim().to_lowercase()))
    }

    /// The normalised zone label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClimateZone {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl<'de> Deserialize<'de> for ClimateZone {
    fn deserialize<D>(deserialiser: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label: String = Deserialize::deserialize(deserialiser)?;
        Ok(Self::new(&label))
    }
}

/// A row of the province equivalence table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClimateEquivalence {
    /// The province as selected by the user
    pub province: ProvinceID,
    /// The agronomically equivalent province used for catalog data
    pub equivalent_province: ProvinceID,
    /// The climate zone assigned to the province
    pub climate_zone: ClimateZone,
}

/// A map of [`ClimateEquivalence`]s, keyed by province
pub type ClimateZoneMap = IndexMap<ProvinceID, ClimateEquivalence>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mediterraneo", "mediterraneo")]
    #[case("  Mediterraneo ", "mediterraneo")]
    #[case("ATLANTICO", "atlantico")]
    fn test_climate_zone_normalisation(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(ClimateZone::new(raw).as_str(), expected);
    }

    #[test]
    fn test_climate_zone_eq_ignores_case_and_whitespace() {
        assert_eq!(ClimateZone::new("Continental "), ClimateZone::new("continental"));
    }
}
