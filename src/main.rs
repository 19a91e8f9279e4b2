//! Reports whether each argument is a leap year.
//!
//! Arguments are read as JSON, so `2024` is a year while `"2024"`, `2024.5`, `null`, `[]` and
//! `{}` are rejected. Exits with status 1 if any argument was rejected.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing::debug;

use leapyear::{is_leap_year, year_from_value, LeapYearRule};

#[derive(Parser)]
#[command(name = "leapyear")]
#[command(about = "Check years against the gregorian leap year rule", long_about = None)]
#[command(version)]
struct Cli {
    /// Years to check
    #[arg(required = true, allow_negative_numbers = true)]
    years: Vec<String>,

    /// Print the rule that decided each verdict
    #[arg(long)]
    explain: bool,

    /// Log level
    #[arg(long, env = "LEAPYEAR_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

// Text that isn't valid JSON is taken as a string, which is never a year.
fn parse_argument(argument: &str) -> Value {
    serde_json::from_str(argument).unwrap_or_else(|_| Value::String(argument.to_owned()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("leapyear: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Writes a verdict per year to `out` and each rejected argument to `err`. Returns whether every
/// argument was a valid year.
fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let mut all_valid = true;
    for argument in &cli.years {
        let year = match year_from_value(&parse_argument(argument)) {
            Ok(year) => year,
            Err(e) => {
                writeln!(err, "{argument}: invalid argument: {e}")?;
                all_valid = false;
                continue;
            }
        };
        debug!(year, "evaluating");
        let verdict = if is_leap_year(year) {
            "leap year"
        } else {
            "not a leap year"
        };
        if cli.explain {
            let rule = LeapYearRule::classify(year);
            writeln!(out, "{argument}: {verdict} ({})", rule.description())?;
        } else {
            writeln!(out, "{argument}: {verdict}")?;
        }
    }
    Ok(all_valid)
}
