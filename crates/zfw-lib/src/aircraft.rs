//! Aircraft types with tabulated payload maxima.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::season::Season;
use crate::tables::max_payload_lb;

/// Minimum normalized Levenshtein similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// Tail types the checker carries planning maxima for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AircraftType {
    #[default]
    #[serde(rename = "CJ2")]
    Cj2,
    #[serde(rename = "CJ3")]
    Cj3,
    #[serde(rename = "Embraer")]
    Embraer,
}

impl AircraftType {
    /// All aircraft in display order.
    pub const ALL: [AircraftType; 3] = [AircraftType::Cj2, AircraftType::Cj3, AircraftType::Embraer];

    pub const fn name(self) -> &'static str {
        match self {
            AircraftType::Cj2 => "CJ2",
            AircraftType::Cj3 => "CJ3",
            AircraftType::Embraer => "Embraer",
        }
    }

    /// Maximum combined pax + cargo weight (lb) for this aircraft in `season`.
    pub const fn max_payload_lb(self, season: Season) -> u32 {
        max_payload_lb(self, season)
    }

    /// Known names most similar to `name`, best match first.
    pub fn suggestions(name: &str) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &'static str)> = Self::ALL
            .iter()
            .map(|aircraft| {
                let score = strsim::normalized_levenshtein(&needle, &aircraft.name().to_lowercase());
                (score, aircraft.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, n)| n.to_string()).collect()
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AircraftType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|aircraft| aircraft.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownAircraft {
                name: trimmed.to_string(),
                suggestions: Self::suggestions(trimmed),
            })
    }
}
