use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let succeeded = match cli.command {
        Commands::Get(args) => commands::get_command(args)?,
        Commands::Exists(args) => commands::exists_command(args)?,
        Commands::Size(args) => commands::size_command(args)?,
        Commands::Type(args) => commands::type_command(args)?,
        Commands::Segments(args) => commands::segments_command(args)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
