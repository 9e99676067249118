//! Output formatting for check results and the limit tables.
//!
//! Text renderings are built into a `String` and printed by the command handlers;
//! JSON renderings serialize the report types directly.

use std::fmt::Write;

use serde::Serialize;

use zfw_lib::{
    payload_limit_table, standard_weight_table, AircraftType, CargoSpec, PassengerSpec,
    PayloadLimits, PayloadResult, Season, Session, StandardWeights, Verdict,
    DEFAULT_CARGO_PER_PASSENGER_LB,
};

use crate::terminal::ColorPalette;

/// Footer printed under every text check.
pub const FOOTER_NOTE: &str = "Note: This tool checks pax + cargo against your planning maxima for each tail type and season. It does not compute full ZFW or CG.";

/// Prompt shown instead of a verdict when nothing has been entered.
pub const NO_INPUT_PROMPT: &str = "Enter passengers and/or cargo to calculate.";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Machine-readable JSON document.
    Json,
}

/// How passengers were entered for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerMode {
    Standard,
    Explicit,
}

/// Everything a check renders: the echoed inputs, the limits and the result.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub aircraft: AircraftType,
    pub month: String,
    pub auto_season: Season,
    pub season: Season,
    pub season_overridden: bool,
    pub passenger_mode: PassengerMode,
    pub passengers: PassengerSpec,
    pub cargo: CargoSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_weights: Option<StandardWeights>,
    pub result: PayloadResult,
    pub verdict: Verdict,
}

impl CheckReport {
    pub fn new(session: &Session, result: PayloadResult) -> Self {
        let request = session.request();
        let (passenger_mode, standard_weights) = if request.passengers.is_explicit() {
            (PassengerMode::Explicit, None)
        } else {
            (
                PassengerMode::Standard,
                Some(StandardWeights::for_season(request.season)),
            )
        };
        Self {
            aircraft: request.aircraft,
            month: session.month().name().to_string(),
            auto_season: session.auto_season(),
            season: request.season,
            season_overridden: session.season_override().is_some(),
            passenger_mode,
            passengers: request.passengers,
            cargo: request.cargo,
            standard_weights,
            result,
            verdict: result.verdict(),
        }
    }
}

/// Both planning tables.
#[derive(Debug, Clone, Serialize)]
pub struct LimitsReport {
    pub payload_limits: Vec<PayloadLimits>,
    pub standard_weights: Vec<StandardWeights>,
    pub default_cargo_per_passenger_lb: u32,
}

impl LimitsReport {
    pub fn current() -> Self {
        Self {
            payload_limits: payload_limit_table(),
            standard_weights: standard_weight_table(),
            default_cargo_per_passenger_lb: DEFAULT_CARGO_PER_PASSENGER_LB,
        }
    }
}

/// Serialize any report as pretty JSON.
pub fn format_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render a check report as a text summary.
pub fn format_check_text(report: &CheckReport, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let result = &report.result;
    let p = palette;

    let _ = writeln!(
        out,
        "{}Auto-detected season from {}: {}{}",
        p.gray, report.month, report.auto_season, p.reset
    );
    if report.season_overridden {
        let _ = writeln!(
            out,
            "{}Season manually set to {}{}",
            p.gray, report.season, p.reset
        );
    }

    let _ = writeln!(out, "\n{}Inputs{}", p.bold, p.reset);
    match &report.standard_weights {
        Some(stds) => {
            let _ = writeln!(
                out,
                "  Passengers (std {}): {}",
                report.season, result.total_passengers
            );
            let _ = writeln!(
                out,
                "  {}Std weights: Male {} / Female {} / Child {} / Infant {} lb{}",
                p.gray, stds.male, stds.female, stds.child, stds.infant, p.reset
            );
        }
        None => {
            let _ = writeln!(
                out,
                "  Passengers (actual weights): {}",
                result.total_passengers
            );
        }
    }
    let _ = writeln!(out, "  Cargo: {:.0} lb", result.cargo_weight_lb);
    if !report.cargo.is_override() {
        let _ = writeln!(
            out,
            "  Assumed cargo: {:.0} lb ({} lb x {} pax)",
            result.cargo_weight_lb, DEFAULT_CARGO_PER_PASSENGER_LB, result.total_passengers
        );
    }

    let _ = writeln!(out, "\n{}Limits{}", p.bold, p.reset);
    let _ = writeln!(out, "  Aircraft: {}", report.aircraft);
    let _ = writeln!(out, "  Season: {}", report.season);
    let _ = writeln!(out, "  Max pax + cargo: {:.0} lb", result.max_allowed_lb);

    out.push('\n');
    let verdict_line = match report.verdict {
        Verdict::NoInput => None,
        Verdict::WithinLimits { margin_lb } => Some(format!(
            "{}WITHIN LIMITS by {:.0} lb{}",
            p.green, margin_lb, p.reset
        )),
        Verdict::OverLimit { excess_lb } => Some(format!(
            "{}OVER LIMIT by {:.0} lb{}",
            p.red, excess_lb, p.reset
        )),
    };
    match verdict_line {
        None => {
            let _ = writeln!(out, "{}{}{}", p.cyan, NO_INPUT_PROMPT, p.reset);
        }
        Some(line) => {
            let _ = writeln!(out, "{line}");
            let _ = writeln!(out, "  - Pax weight: {:.0} lb", result.passenger_weight_lb);
            let _ = writeln!(out, "  - Cargo weight: {:.0} lb", result.cargo_weight_lb);
            let _ = writeln!(
                out,
                "  - Total pax + cargo: {:.0} lb",
                result.total_payload_lb
            );
            let _ = writeln!(out, "  - Max allowed: {:.0} lb", result.max_allowed_lb);
        }
    }

    let _ = write!(out, "\n{}{}{}", p.gray, FOOTER_NOTE, p.reset);
    out
}

/// Render both planning tables as text.
pub fn format_limits_text(report: &LimitsReport, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let p = palette;

    let _ = writeln!(out, "{}Max pax + cargo (lb){}", p.bold, p.reset);
    let _ = writeln!(out, "{:<10} {:>8} {:>8}", "Aircraft", "Summer", "Winter");
    for row in &report.payload_limits {
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>8}",
            row.aircraft.name(),
            row.summer_lb,
            row.winter_lb
        );
    }

    let _ = writeln!(out, "\n{}Standard passenger weights (lb){}", p.bold, p.reset);
    let _ = writeln!(
        out,
        "{:<10} {:>6} {:>6} {:>6} {:>6}",
        "Season", "Male", "Female", "Child", "Infant"
    );
    for row in &report.standard_weights {
        let _ = writeln!(
            out,
            "{:<10} {:>6} {:>6} {:>6} {:>6}",
            row.season.name(),
            row.male,
            row.female,
            row.child,
            row.infant
        );
    }

    let _ = write!(
        out,
        "\n{}Default cargo: {} lb per passenger{}",
        p.gray, report.default_cargo_per_passenger_lb, p.reset
    );
    out
}
