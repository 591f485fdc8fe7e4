// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

mod cmd;
mod config;
mod encoder;
mod error;
mod generator;
mod json_schema;
mod orchestrator;
mod progress;
mod registry;
mod schema;
mod value;
mod writer;

use clap::error::ErrorKind;
use clap::Parser;
use cmd::Cli;
use error::GenError;

/// Exit code for command-line usage errors.
const EXIT_USAGE: i32 = 3;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = cmd::run(cli) {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<GenError>().map_or(1, GenError::exit_code);
        std::process::exit(code);
    }
}
