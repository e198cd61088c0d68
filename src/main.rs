//! shed - declarative development shell bootstrapper
//!
//! Evaluates a shed.yaml environment descriptor (named package-source
//! inputs, target platforms, interpreter + libraries + tools) against
//! per-input package indices and pins the resolved shell definitions in
//! shed.lock.

use clap::Parser;

mod cli;
mod commands;
mod definition;
mod descriptor;
mod error;
mod hash;
mod lockfile;
mod platform;
mod resolver;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(cli.workspace),
        Commands::Check => commands::check::run(cli.workspace),
        Commands::Resolve(args) => commands::resolve::run(cli.workspace, args, cli.verbose),
        Commands::Show(args) => commands::show::run(cli.workspace, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
