//! Max ZFW (pax + cargo) checker library entry points.
//!
//! This crate holds the planning tables, the season helper and the pure payload
//! evaluator. It checks passengers plus cargo against per-aircraft, per-season planning
//! maxima; it does not compute a full zero fuel weight or centre of gravity. UI layers
//! (the CLI) should only depend on the items exported here.

#![deny(warnings)]

pub mod aircraft;
pub mod cargo;
pub mod error;
pub mod evaluate;
pub mod passengers;
pub mod season;
pub mod session;
pub mod tables;

pub use aircraft::AircraftType;
pub use cargo::{default_cargo_lb, CargoEntry, CargoSpec};
pub use error::{Error, Result};
pub use evaluate::{evaluate, EvaluationRequest, PayloadResult, Verdict};
pub use passengers::{PassengerCategory, PassengerCounts, PassengerSpec};
pub use season::{current_month, parse_month, resolve_season, Season};
pub use session::{PassengerEntry, Session};
pub use tables::{
    max_payload_lb, payload_limit_table, standard_weight_lb, standard_weight_table,
    PayloadLimits, StandardWeights, DEFAULT_CARGO_PER_PASSENGER_LB, MAX_EXPLICIT_PASSENGERS,
};

pub use chrono::Month;
