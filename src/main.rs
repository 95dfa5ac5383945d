//! cmakemin CLI entry point

use clap::Parser;
use cmakemin::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = cmakemin::cli::patch::run_patch(&cli.versions, cli.color);

    process::exit(exit_code);
}
