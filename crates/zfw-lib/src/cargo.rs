//! Cargo weight: a per-passenger default allowance or an explicit override.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_weight, Result};
use crate::tables::DEFAULT_CARGO_PER_PASSENGER_LB;

/// Default cargo allowance (lb) for a given passenger count.
pub fn default_cargo_lb(total_passengers: u64) -> f64 {
    (total_passengers * u64::from(DEFAULT_CARGO_PER_PASSENGER_LB)) as f64
}

/// Cargo weight as supplied to a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "weight_lb", rename_all = "snake_case")]
pub enum CargoSpec {
    /// 30 lb per passenger.
    #[default]
    Default,
    /// Explicit total cargo weight in pounds.
    Override(f64),
}

impl CargoSpec {
    /// Validated override spec.
    pub fn overridden(weight_lb: f64) -> Result<Self> {
        Ok(CargoSpec::Override(ensure_weight("cargo weight", weight_lb)?))
    }

    /// Cargo weight (lb) for the given passenger count.
    pub fn weight_lb(&self, total_passengers: u64) -> Result<f64> {
        match *self {
            CargoSpec::Default => Ok(default_cargo_lb(total_passengers)),
            CargoSpec::Override(weight) => ensure_weight("cargo weight", weight),
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, CargoSpec::Override(_))
    }
}

/// Cargo entry state held by an input session.
///
/// While `Default`, cargo tracks the passenger count on every evaluation. While
/// `Overridden`, the stored value is kept across passenger changes until the
/// override is disabled. Disabling discards the stored value, so re-enabling
/// starts again from the computed default rather than a previous custom value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CargoEntry {
    #[default]
    Default,
    Overridden(f64),
}

impl CargoEntry {
    /// Turn the override on, seeding it with `current_default_lb` if it was off.
    pub fn enable_override(&mut self, current_default_lb: f64) {
        if let CargoEntry::Default = self {
            debug!(seed_lb = current_default_lb, "cargo override enabled");
            *self = CargoEntry::Overridden(current_default_lb);
        }
    }

    /// Store an explicit cargo weight, enabling the override.
    pub fn set_override(&mut self, weight_lb: f64) -> Result<()> {
        let weight_lb = ensure_weight("cargo weight", weight_lb)?;
        *self = CargoEntry::Overridden(weight_lb);
        Ok(())
    }

    /// Return to the passenger-derived default, discarding any stored value.
    pub fn disable_override(&mut self) {
        if let CargoEntry::Overridden(previous) = self {
            debug!(discarded_lb = *previous, "cargo override disabled");
        }
        *self = CargoEntry::Default;
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, CargoEntry::Overridden(_))
    }

    /// Snapshot for an evaluation request.
    pub fn spec(&self) -> CargoSpec {
        match *self {
            CargoEntry::Default => CargoSpec::Default,
            CargoEntry::Overridden(weight) => CargoSpec::Override(weight),
        }
    }
}
