// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "draw_numbers",
    version = crate::VERSION,
    about = "Randomized number combinations for lottery-style games"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of games and record its statistics
    Generate(GenerateArgs),
    /// Show the accumulated frequency statistics
    Stats(StatsArgs),
    /// Remove every statistics entry
    Clear(ClearArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Smallest drawable number
    #[arg(long, default_value_t = 1, help_heading = "Draw")]
    pub min: u32,

    /// Largest drawable number
    #[arg(long, default_value_t = 60, help_heading = "Draw")]
    pub max: u32,

    /// Games to generate in this batch
    #[arg(long, default_value_t = 1, help_heading = "Draw")]
    pub games: usize,

    /// Numbers per game
    #[arg(long = "per-game", default_value_t = 6, help_heading = "Draw")]
    pub per_game: usize,

    /// Avoid repeating numbers across games for as long as the range allows
    #[arg(long, help_heading = "Draw")]
    pub maximize_unique: bool,

    /// Numbers pinned into every game (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Draw")]
    pub fixed: Vec<u32>,

    /// Seed for reproducible draws
    #[arg(long, help_heading = "Draw")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Statistics ledger location
    #[arg(long, default_value = "lottery-stats.json", help_heading = "Statistics")]
    pub stats_file: PathBuf,

    /// Skip statistics recording for this batch
    #[arg(long, help_heading = "Statistics")]
    pub no_stats: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Most frequent numbers to show per configuration
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Statistics ledger location
    #[arg(long, default_value = "lottery-stats.json")]
    pub stats_file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ClearArgs {
    /// Proceed without confirmation
    #[arg(long)]
    pub yes: bool,

    /// Statistics ledger location
    #[arg(long, default_value = "lottery-stats.json")]
    pub stats_file: PathBuf,
}
