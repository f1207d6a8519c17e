//! Code for working with calendar months.
//!
//! Months form a cyclic domain: a crop planted late in the year keeps occupying
//! land past December, wrapping around into January.
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The number of months in the planning horizon (one calendar year)
pub const MONTHS_PER_YEAR: u8 = 12;

/// A calendar month, numbered 1 (January) to 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    /// Create a new [`Month`], checking that the number is in the 1-12 domain
    pub fn new(month: u8) -> Result<Self> {
        ensure!(
            (1..=MONTHS_PER_YEAR).contains(&month),
            "Month must be between 1 and 12, got {month}"
        );

        Ok(Self(month))
    }

    /// The month number (1-12)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Iterate over all months of the year, in calendar order
    pub fn iter_all() -> impl Iterator<Item = Month> + Clone {
        (1..=MONTHS_PER_YEAR).map(Month)
    }

    /// The month `offset` months after this one, wrapping around the year end
    pub fn advance(self, offset: u32) -> Month {
        let index = (u32::from(self.0) - 1 + offset) % u32::from(MONTHS_PER_YEAR);
        Month(index as u8 + 1)
    }

    /// Iterate over the months occupied by a crop planted in this month.
    ///
    /// A crop occupying land for `duration` months starting in December wraps
    /// around into January of the following cycle.
    pub fn occupied_window(self, duration: u32) -> impl Iterator<Item = Month> {
        (0..duration).map(move |offset| self.advance(offset))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serialiser: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialiser.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserialiser: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let month: u8 = Deserialize::deserialize(deserialiser)?;
        Month::new(month).map_err(serde::de::Error::custom)
    }
}
