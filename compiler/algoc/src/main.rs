//! `algo`: interpreter for French algorithmic pseudocode.

use std::process::ExitCode;

use algoc::commands::execute;
use algoc::{init_tracing, Config, ConfigError, USAGE};

fn main() -> ExitCode {
    init_tracing();

    match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => execute(&config),
        Err(ConfigError::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}
