//! Season selection.
//!
//! The flight month suggests a season (April through October is summer); a manual
//! override, once set, always wins over that suggestion.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Month};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Planning season that selects standard weights and payload maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Summer, Season::Winter];

    /// Season suggested for a flight month.
    pub fn from_month(month: Month) -> Self {
        match month.number_from_month() {
            4..=10 => Season::Summer,
            _ => Season::Winter,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Season::ALL
            .iter()
            .copied()
            .find(|season| season.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownSeason {
                name: trimmed.to_string(),
            })
    }
}

/// Effective season: the override if one is set, otherwise the month's season.
pub fn resolve_season(month: Month, season_override: Option<Season>) -> Season {
    season_override.unwrap_or_else(|| Season::from_month(month))
}

/// Parse a month from an English name, a three-letter abbreviation, or a number 1-12.
pub fn parse_month(input: &str) -> Result<Month> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return Month::try_from(number).map_err(|_| Error::UnknownMonth {
            name: trimmed.to_string(),
        });
    }

    trimmed.parse::<Month>().map_err(|_| Error::UnknownMonth {
        name: trimmed.to_string(),
    })
}

/// Month of the local calendar date.
pub fn current_month() -> Result<Month> {
    let number = Local::now().month();
    u8::try_from(number)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .ok_or_else(|| Error::UnknownMonth {
            name: number.to_string(),
        })
}
