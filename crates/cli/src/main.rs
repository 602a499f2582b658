mod cli;
mod error;
mod view;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View(args) => view::view(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
