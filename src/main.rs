//! Format and minify CSS code.

use std::process::ExitCode;

use anyhow::Result;
use log::LevelFilter;
use stylefmt::cli::{Cli, Command, Parser};

fn main() -> Result<ExitCode> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Format {
            paths,
            check,
            indent,
        } => {
            if !stylefmt::cli::format(&cli.opts, &paths, check, indent)? {
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Minify {
            paths,
            keep_variables,
            keep_calc,
        } => stylefmt::cli::minify(&cli.opts, &paths, keep_variables, keep_calc)?,
    }

    Ok(ExitCode::SUCCESS)
}
