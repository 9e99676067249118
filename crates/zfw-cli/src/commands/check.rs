//! Check command handler for evaluating one pax + cargo loading.

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use zfw_lib::{
    current_month, parse_month, AircraftType, Month, PassengerCounts, Season, Session,
    MAX_EXPLICIT_PASSENGERS,
};

use crate::output::{format_check_text, format_json, CheckReport, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the check command.
#[derive(Debug, Clone, Args)]
pub struct CheckCommandArgs {
    /// Aircraft type (CJ2, CJ3 or Embraer).
    #[arg(long, env = "ZFW_AIRCRAFT", default_value = "CJ2", value_parser = parse_aircraft)]
    pub aircraft: AircraftType,

    /// Flight month as a name or number; defaults to the current month.
    #[arg(long, value_parser = parse_month_arg)]
    pub month: Option<Month>,

    /// Manual season override (summer or winter).
    #[arg(long, value_parser = parse_season)]
    pub season: Option<Season>,

    /// Number of male passengers at standard weight.
    #[arg(long, conflicts_with_all = ["pax_weight", "pax_count"])]
    pub male: Option<u32>,

    /// Number of female passengers at standard weight.
    #[arg(long, conflicts_with_all = ["pax_weight", "pax_count"])]
    pub female: Option<u32>,

    /// Number of child passengers at standard weight.
    #[arg(long, conflicts_with_all = ["pax_weight", "pax_count"])]
    pub child: Option<u32>,

    /// Number of infant passengers at standard weight.
    #[arg(long, conflicts_with_all = ["pax_weight", "pax_count"])]
    pub infant: Option<u32>,

    /// Actual passenger weight in lb; repeat or comma-separate for several passengers.
    #[arg(long = "pax-weight", value_delimiter = ',', allow_negative_numbers = true)]
    pub pax_weight: Vec<f64>,

    /// Total passengers when entering actual weights; defaults to the number of weights.
    #[arg(
        long = "pax-count",
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_EXPLICIT_PASSENGERS))
    )]
    pub pax_count: Option<u32>,

    /// Cargo weight override in lb; defaults to 30 lb per passenger.
    #[arg(long, allow_negative_numbers = true)]
    pub cargo: Option<f64>,
}

impl CheckCommandArgs {
    /// `true` when passengers are entered by individual weight rather than by category.
    pub fn explicit_weights(&self) -> bool {
        !self.pax_weight.is_empty() || self.pax_count.is_some()
    }

    /// Build a session from the parsed arguments, validating numeric input.
    pub fn to_session(&self, default_month: Month) -> Result<Session> {
        let mut session = Session::new(self.month.unwrap_or(default_month));
        session.set_aircraft(self.aircraft);
        session.set_season_override(self.season);

        if self.explicit_weights() {
            let count = self
                .pax_count
                .map_or(self.pax_weight.len(), |count| count as usize);
            if self.pax_weight.len() > count {
                bail!(
                    "{} passenger weights supplied for {} passengers",
                    self.pax_weight.len(),
                    count
                );
            }
            session
                .set_explicit_count(count)
                .context("invalid passenger count")?;
            for (idx, &weight) in self.pax_weight.iter().enumerate() {
                session
                    .set_passenger_weight(idx, weight)
                    .context("invalid passenger weight")?;
            }
        } else {
            session.set_standard_counts(PassengerCounts::new(
                self.male.unwrap_or(0),
                self.female.unwrap_or(0),
                self.child.unwrap_or(0),
                self.infant.unwrap_or(0),
            ));
        }

        if let Some(cargo) = self.cargo {
            session
                .set_cargo_override(cargo)
                .context("invalid cargo weight")?;
        }

        Ok(session)
    }
}

/// Handle the check subcommand.
///
/// Evaluates the loading described by `args` and prints the verdict.
pub fn handle_check(
    args: &CheckCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let default_month = current_month().context("failed to read the current month")?;
    let session = args.to_session(default_month)?;
    info!(
        aircraft = %session.aircraft(),
        season = %session.season(),
        passengers = session.total_passengers(),
        "checking payload"
    );

    let result = session.evaluate().context("failed to evaluate payload")?;
    let report = CheckReport::new(&session, result);

    match format {
        OutputFormat::Text => println!("{}", format_check_text(&report, palette)),
        OutputFormat::Json => {
            let json = format_json(&report).context("failed to serialize check result")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn parse_aircraft(s: &str) -> zfw_lib::Result<AircraftType> {
    s.parse()
}

fn parse_season(s: &str) -> zfw_lib::Result<Season> {
    s.parse()
}

fn parse_month_arg(s: &str) -> zfw_lib::Result<Month> {
    parse_month(s)
}
