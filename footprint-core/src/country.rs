//! Countries with emission factor coverage.

use crate::errors::FootprintError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A country with an entry in the bundled factor table.
///
/// The supported set is fixed at these four members. `FromStr` accepts the
/// display names case-insensitively so the same spelling works from CLI
/// flags and scenario files. Serde serializes the display name, which keeps
/// countries usable as TOML table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    India,
    Indonesia,
    Us,
    Uk,
}

impl Country {
    /// All supported countries, in display order.
    pub const ALL: [Country; 4] = [Country::India, Country::Indonesia, Country::Us, Country::Uk];

    /// Human-readable name, as shown in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Indonesia => "Indonesia",
            Country::Us => "US",
            Country::Uk => "UK",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Country {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|country| country.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FootprintError::UnknownCountry(s.to_string()))
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
