use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use string_calculator::engine::create_from_config;
use string_calculator::interfaces::LoggingEventHandler;
use string_calculator::unescape_newlines;

use super::args::{CliArgs, LogLevel};
use super::errors::AppError;

const PROMPT: &str = "Please enter the numbers to be calculated, separated by a comma:";

fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read lines from stdin and print one formula per line.
///
/// Stops at the first line that fails to calculate.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let config = args.to_config();
    debug!(?config, "Starting calculator");
    let calculator =
        create_from_config(config, Arc::new(LoggingEventHandler)).map_err(AppError::Config)?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("{PROMPT}");
    }

    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.inspect_err(|err| error!(%err, "Error reading input"))?;
        let input = unescape_newlines(&line);

        let calculation = calculator.add(&input)?;
        writeln!(stdout, "{calculation}")?;
    }

    Ok(())
}
