//! Ephemeral input state for one planning session.
//!
//! A [`Session`] owns the user's current selections (aircraft, month, season override,
//! passenger entry, cargo entry) and turns them into an [`EvaluationRequest`] on demand.
//! Nothing here outlives the session.

use chrono::Month;
use tracing::debug;

use crate::aircraft::AircraftType;
use crate::cargo::{default_cargo_lb, CargoEntry};
use crate::error::{ensure_weight, Error, Result};
use crate::evaluate::{EvaluationRequest, PayloadResult};
use crate::passengers::{PassengerCounts, PassengerSpec};
use crate::season::{resolve_season, Season};
use crate::tables::MAX_EXPLICIT_PASSENGERS;

/// Passenger entry mode with the values entered for it.
#[derive(Debug, Clone, PartialEq)]
pub enum PassengerEntry {
    Standard(PassengerCounts),
    /// One weight field per passenger; the field count is the passenger count.
    Explicit(Vec<f64>),
}

impl Default for PassengerEntry {
    fn default() -> Self {
        PassengerEntry::Standard(PassengerCounts::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    aircraft: AircraftType,
    month: Month,
    season_override: Option<Season>,
    passengers: PassengerEntry,
    cargo: CargoEntry,
}

impl Session {
    /// New session with default selections for the given flight month.
    pub fn new(month: Month) -> Self {
        Self {
            aircraft: AircraftType::default(),
            month,
            season_override: None,
            passengers: PassengerEntry::default(),
            cargo: CargoEntry::default(),
        }
    }

    pub fn aircraft(&self) -> AircraftType {
        self.aircraft
    }

    pub fn set_aircraft(&mut self, aircraft: AircraftType) {
        self.aircraft = aircraft;
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn set_month(&mut self, month: Month) {
        self.month = month;
    }

    /// Season suggested by the selected month, ignoring any override.
    pub fn auto_season(&self) -> Season {
        Season::from_month(self.month)
    }

    /// Effective season.
    pub fn season(&self) -> Season {
        resolve_season(self.month, self.season_override)
    }

    pub fn season_override(&self) -> Option<Season> {
        self.season_override
    }

    pub fn set_season_override(&mut self, season: Option<Season>) {
        self.season_override = season;
    }

    pub fn passengers(&self) -> &PassengerEntry {
        &self.passengers
    }

    /// Switch to standard-weight entry with the given counts.
    pub fn set_standard_counts(&mut self, counts: PassengerCounts) {
        self.passengers = PassengerEntry::Standard(counts);
    }

    /// Switch to explicit-weight entry with exactly `count` weight fields.
    ///
    /// Existing field values are kept, new fields start at 0 lb and surplus fields are
    /// dropped. Counts above [`MAX_EXPLICIT_PASSENGERS`] are rejected and leave the
    /// entry untouched.
    pub fn set_explicit_count(&mut self, count: usize) -> Result<()> {
        if count > MAX_EXPLICIT_PASSENGERS as usize {
            return Err(Error::InvalidInput {
                field: "passenger count".to_string(),
                message: format!("must be at most {MAX_EXPLICIT_PASSENGERS}, got {count}"),
            });
        }
        let mut weights = match std::mem::take(&mut self.passengers) {
            PassengerEntry::Explicit(weights) => weights,
            PassengerEntry::Standard(_) => Vec::new(),
        };
        weights.resize(count, 0.0);
        debug!(count, "regenerated passenger weight fields");
        self.passengers = PassengerEntry::Explicit(weights);
        Ok(())
    }

    /// Set the weight of passenger `index` (zero-based). Returns `false` when there is no
    /// such field.
    pub fn set_passenger_weight(&mut self, index: usize, weight_lb: f64) -> Result<bool> {
        let weight_lb = ensure_weight(&format!("weight for passenger {}", index + 1), weight_lb)?;
        match &mut self.passengers {
            PassengerEntry::Explicit(weights) => match weights.get_mut(index) {
                Some(slot) => {
                    *slot = weight_lb;
                    Ok(true)
                }
                None => Ok(false),
            },
            PassengerEntry::Standard(_) => Ok(false),
        }
    }

    /// Total passenger count for the current entry.
    pub fn total_passengers(&self) -> u64 {
        match &self.passengers {
            PassengerEntry::Standard(counts) => counts.total(),
            PassengerEntry::Explicit(weights) => weights.len() as u64,
        }
    }

    /// Cargo allowance implied by the current passenger count.
    pub fn default_cargo_lb(&self) -> f64 {
        default_cargo_lb(self.total_passengers())
    }

    pub fn cargo(&self) -> CargoEntry {
        self.cargo
    }

    /// Enable the cargo override, seeded with the current default if it was off.
    pub fn enable_cargo_override(&mut self) {
        let seed = self.default_cargo_lb();
        self.cargo.enable_override(seed);
    }

    pub fn set_cargo_override(&mut self, weight_lb: f64) -> Result<()> {
        self.cargo.set_override(weight_lb)
    }

    pub fn disable_cargo_override(&mut self) {
        self.cargo.disable_override();
    }

    /// Snapshot the session as an immutable evaluation request.
    pub fn request(&self) -> EvaluationRequest {
        let passengers = match &self.passengers {
            PassengerEntry::Standard(counts) => PassengerSpec::StandardCounts(*counts),
            PassengerEntry::Explicit(weights) => PassengerSpec::explicit(weights.clone()),
        };
        EvaluationRequest::new(self.aircraft, self.season(), passengers, self.cargo.spec())
    }

    pub fn evaluate(&self) -> Result<PayloadResult> {
        self.request().evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_uses_defaults() {
        let session = Session::new(Month::July);
        assert_eq!(session.aircraft(), AircraftType::Cj2);
        assert_eq!(session.season(), Season::Summer);
        assert_eq!(session.total_passengers(), 0);
        assert_eq!(session.cargo(), CargoEntry::Default);
    }

    #[test]
    fn weight_outside_generated_fields_is_reported() {
        let mut session = Session::new(Month::May);
        session.set_explicit_count(2).expect("valid count");
        assert_eq!(session.set_passenger_weight(1, 170.0), Ok(true));
        assert_eq!(session.set_passenger_weight(2, 170.0), Ok(false));
    }

    #[test]
    fn oversized_explicit_count_is_rejected() {
        let mut session = Session::new(Month::May);
        session.set_explicit_count(2).expect("valid count");

        let err = session
            .set_explicit_count(usize::MAX)
            .expect_err("count too large");
        match err {
            Error::InvalidInput { field, message } => {
                assert_eq!(field, "passenger count");
                assert!(message.contains("at most 1000"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(session.passengers(), &PassengerEntry::Explicit(vec![0.0, 0.0]));

        session
            .set_explicit_count(MAX_EXPLICIT_PASSENGERS as usize)
            .expect("largest count is accepted");
        assert_eq!(session.total_passengers(), u64::from(MAX_EXPLICIT_PASSENGERS));
    }

    #[test]
    fn standard_mode_has_no_weight_fields() {
        let mut session = Session::new(Month::May);
        assert_eq!(session.set_passenger_weight(0, 170.0), Ok(false));
    }
}
