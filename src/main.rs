//! Conquest CLI - Command-line interface for the territory game variants.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Conquest - a territory-conquest board game simulator
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a fixed-size map of 5 territories and display it
    Register,

    /// Play on a dynamically sized map with an interactive attack phase
    Play {
        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play the mission campaign: conquer until your drawn mission holds
    Campaign {
        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run mass auto-played campaigns and aggregate statistics
    Simulate {
        /// Number of campaigns to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each campaign)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum turns per campaign (default: 100)
        #[arg(short = 't', long, default_value = "100")]
        max_turns: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Register => cli::register::execute(),

        Commands::Play { seed } => cli::play::execute(seed),

        Commands::Campaign { seed } => cli::campaign::execute(seed),

        Commands::Simulate {
            games,
            seed,
            threads,
            max_turns,
            format,
            progress,
        } => cli::simulate::execute(games, seed, threads, max_turns, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
