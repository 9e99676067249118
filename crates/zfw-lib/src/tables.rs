//! Planning constants: per-aircraft payload maxima and seasonal standard passenger weights.
//!
//! Both tables are exhaustive `match` expressions over closed enumerations, so a
//! missing aircraft or season entry is a compile error rather than a runtime miss.

use serde::Serialize;

use crate::aircraft::AircraftType;
use crate::passengers::PassengerCategory;
use crate::season::Season;

/// Assumed cargo allowance per passenger when no cargo override is entered (lb).
pub const DEFAULT_CARGO_PER_PASSENGER_LB: u32 = 30;

/// Largest passenger count accepted for individually weighed passengers.
pub const MAX_EXPLICIT_PASSENGERS: u32 = 1_000;

/// Maximum combined passenger + cargo weight (lb) for an aircraft in a season.
pub const fn max_payload_lb(aircraft: AircraftType, season: Season) -> u32 {
    match (aircraft, season) {
        (AircraftType::Cj2, Season::Summer) => 1086,
        (AircraftType::Cj2, Season::Winter) => 1034,
        (AircraftType::Cj3, Season::Summer) => 1602,
        (AircraftType::Cj3, Season::Winter) => 1550,
        (AircraftType::Embraer, Season::Summer) => 2116,
        (AircraftType::Embraer, Season::Winter) => 2104,
    }
}

/// Standard weight (lb) assumed for one passenger of `category` in `season`.
pub const fn standard_weight_lb(season: Season, category: PassengerCategory) -> u32 {
    match (season, category) {
        (Season::Summer, PassengerCategory::Male) => 193,
        (Season::Summer, PassengerCategory::Female) => 159,
        (Season::Winter, PassengerCategory::Male) => 199,
        (Season::Winter, PassengerCategory::Female) => 165,
        (_, PassengerCategory::Child) => 75,
        (_, PassengerCategory::Infant) => 30,
    }
}

/// One row of the standard weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardWeights {
    pub season: Season,
    pub male: u32,
    pub female: u32,
    pub child: u32,
    pub infant: u32,
}

impl StandardWeights {
    pub const fn for_season(season: Season) -> Self {
        Self {
            season,
            male: standard_weight_lb(season, PassengerCategory::Male),
            female: standard_weight_lb(season, PassengerCategory::Female),
            child: standard_weight_lb(season, PassengerCategory::Child),
            infant: standard_weight_lb(season, PassengerCategory::Infant),
        }
    }
}

/// One row of the payload limit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayloadLimits {
    pub aircraft: AircraftType,
    pub summer_lb: u32,
    pub winter_lb: u32,
}

impl PayloadLimits {
    pub const fn for_aircraft(aircraft: AircraftType) -> Self {
        Self {
            aircraft,
            summer_lb: max_payload_lb(aircraft, Season::Summer),
            winter_lb: max_payload_lb(aircraft, Season::Winter),
        }
    }
}

/// Full payload limit table in display order.
pub fn payload_limit_table() -> Vec<PayloadLimits> {
    AircraftType::ALL
        .iter()
        .map(|&aircraft| PayloadLimits::for_aircraft(aircraft))
        .collect()
}

/// Full standard weight table in display order.
pub fn standard_weight_table() -> Vec<StandardWeights> {
    Season::ALL
        .iter()
        .map(|&season| StandardWeights::for_season(season))
        .collect()
}
