//! Subcommands and their flags.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a worksheet from command-line options
    Generate(GenerateArgs),

    /// Ask for level and count on stdin, list the exercises, then write the worksheet
    Console(ConsoleArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of exercises on the sheet
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Difficulty level, 1 to 4
    #[arg(short, long, default_value_t = 3)]
    pub level: u8,

    /// Allowed operators, comma separated (+ - x /)
    #[arg(short, long, default_value = "+,-,x")]
    pub operators: String,

    /// Smallest value operands are drawn from
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Largest value operands are drawn from
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Output document (default: DRILLSHEET_OUTPUT or worksheet.pdf)
    #[arg(short = 'O', long)]
    pub output: Option<PathBuf>,

    /// Seed for a reproducible sheet (overrides DRILLSHEET_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the exercise listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Drill mode: show exercises without answers, count down this many seconds,
    /// then reveal the answers
    #[arg(long)]
    pub countdown: Option<u64>,
}
