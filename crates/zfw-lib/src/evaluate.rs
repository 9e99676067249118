//! Payload evaluation against the planning maximum.
//!
//! [`evaluate`] is a pure function of its inputs: passenger weight plus cargo weight is
//! compared with the tabulated maximum for the aircraft and season, and the margin is
//! reported. Calling it twice with the same inputs yields identical results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::AircraftType;
use crate::cargo::CargoSpec;
use crate::error::{ensure_weight, Result};
use crate::passengers::PassengerSpec;
use crate::season::Season;

/// Immutable inputs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub aircraft: AircraftType,
    pub season: Season,
    pub passengers: PassengerSpec,
    pub cargo: CargoSpec,
}

impl EvaluationRequest {
    pub fn new(
        aircraft: AircraftType,
        season: Season,
        passengers: PassengerSpec,
        cargo: CargoSpec,
    ) -> Self {
        Self {
            aircraft,
            season,
            passengers,
            cargo,
        }
    }

    pub fn evaluate(&self) -> Result<PayloadResult> {
        evaluate(self.aircraft, self.season, &self.passengers, self.cargo)
    }
}

/// Outcome of an evaluation. All weights are in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadResult {
    pub total_passengers: u64,
    pub passenger_weight_lb: f64,
    pub cargo_weight_lb: f64,
    pub total_payload_lb: f64,
    pub max_allowed_lb: f64,
    /// `max_allowed_lb - total_payload_lb`; negative means over the limit.
    pub margin_lb: f64,
    pub within_limits: bool,
}

impl PayloadResult {
    /// `true` when there are no passengers and no cargo, i.e. nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.total_passengers == 0 && self.cargo_weight_lb == 0.0
    }

    /// Presentation verdict. Empty loadings produce [`Verdict::NoInput`] instead of a margin.
    pub fn verdict(&self) -> Verdict {
        if self.is_empty() {
            Verdict::NoInput
        } else if self.within_limits {
            Verdict::WithinLimits {
                margin_lb: self.margin_lb,
            }
        } else {
            Verdict::OverLimit {
                excess_lb: -self.margin_lb,
            }
        }
    }
}

/// How a result should be reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    NoInput,
    WithinLimits { margin_lb: f64 },
    OverLimit { excess_lb: f64 },
}

/// Evaluate a loading for `aircraft` in `season`.
///
/// # Errors
/// - [`Error::SpecMismatch`](crate::Error::SpecMismatch) when explicit weights do not match
///   the declared passenger count.
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) for negative or non-finite weights,
///   including passenger or payload sums too large to represent.
pub fn evaluate(
    aircraft: AircraftType,
    season: Season,
    passengers: &PassengerSpec,
    cargo: CargoSpec,
) -> Result<PayloadResult> {
    let passenger_weight_lb = passengers.weight_lb(season)?;
    let total_passengers = passengers.total_count();
    let cargo_weight_lb = cargo.weight_lb(total_passengers)?;

    let total_payload_lb = ensure_weight("total payload", passenger_weight_lb + cargo_weight_lb)?;
    let max_allowed_lb = f64::from(aircraft.max_payload_lb(season));
    let margin_lb = max_allowed_lb - total_payload_lb;

    debug!(
        %aircraft,
        %season,
        total_passengers,
        passenger_weight_lb,
        cargo_weight_lb,
        total_payload_lb,
        max_allowed_lb,
        margin_lb,
        "evaluated payload"
    );

    Ok(PayloadResult {
        total_passengers,
        passenger_weight_lb,
        cargo_weight_lb,
        total_payload_lb,
        max_allowed_lb,
        margin_lb,
        within_limits: margin_lb >= 0.0,
    })
}
