//! `regatta` command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use regatta_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_reports, run_views};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Views => {
            run_views();
            ExitCode::SUCCESS
        }
        Command::Run(args) => match run_reports(&args) {
            Ok(result) => {
                print_summary(&result);
                ExitCode::SUCCESS
            }
            Err(error) => {
                tracing::error!("{error:#}");
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}
