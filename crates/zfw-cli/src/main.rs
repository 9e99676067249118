use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zfw_cli::commands::check::{handle_check, CheckCommandArgs};
use zfw_cli::commands::limits::handle_limits;
use zfw_cli::output::OutputFormat;
use zfw_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Max ZFW (pax + cargo) checker")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, env = "ZFW_FORMAT", default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check passengers plus cargo against the aircraft's planning maximum.
    Check(CheckCommandArgs),
    /// List payload maxima and standard passenger weights.
    Limits,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::resolve(cli.no_color);

    match &cli.command {
        Command::Check(args) => handle_check(args, cli.format, &palette),
        Command::Limits => handle_limits(cli.format, &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
