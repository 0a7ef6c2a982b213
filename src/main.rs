//! setup-sim - simulation platform package resolver
//!
//! Checks requested simulation platform and bridge distributions against the
//! published compatibility matrix and the host OS, then prints the native
//! packages that install them.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod host;
mod input;
mod logging;
mod matrix;
mod progress;
mod resolver;

use cli::{Cli, Commands};
use error::SetupError;

fn report(err: &SetupError) {
    eprintln!("Error: {}", err);
    if let Some(help) = err.help() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let globals = cli.globals();
    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(&globals, &args),
        Commands::Plan(args) => commands::plan::run(&globals, &args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
