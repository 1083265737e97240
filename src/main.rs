mod app;
mod cli;
mod config;
mod consts;
mod credentials;
mod error;
mod logger;
mod notify;
mod rename;
mod utils;
mod vmix;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::{Config, RunConfig};
use credentials::Credentials;
use logger::EventLog;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    let log = EventLog::new(cli.log_path(), !cli.quiet);

    // Checked before any network or filesystem work
    let project_name = match cli.project_name() {
        Ok(name) => name,
        Err(e) => {
            log.error(e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let result = RunConfig::resolve(&cli, &config)
        .and_then(|run| app::run(&run, project_name, &Credentials::from_env(), &log));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(e.to_string());
            ExitCode::FAILURE
        }
    }
}
