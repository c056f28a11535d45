//! Storefront CLI

use std::process::ExitCode;

use tracing::error;

use crate::config::Config;

mod cli;
mod config;
mod logging;

pub fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    if let Err(err) = logging::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for logging setup errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match cli::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");

            ExitCode::FAILURE
        }
    }
}
