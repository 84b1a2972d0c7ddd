//! Wingbeat CLI - headless driver and inspection tools for the flight system

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{paths, simulate};

#[derive(Parser)]
#[command(name = "wingbeat")]
#[command(about = "Ambient butterfly flight system tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the flight system headless and report swarm activity
    Simulate(simulate::SimulateArgs),

    /// Generate flight paths for a viewport and print them
    Paths(paths::PathsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate::run(args),
        Commands::Paths(args) => paths::run(args),
    }
}
