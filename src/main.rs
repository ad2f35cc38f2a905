//! String calculator CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the line loop, and
//! exit with the status matching the failure.

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
