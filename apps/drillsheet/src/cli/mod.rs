// Command-line front end. Parses arguments, builds a session and hands it to the
// layout export; no generation or layout logic lives here.

pub mod commands;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::exercise::{OperandGenerator, Operator, Session, SessionConfig, ValueRange};
use crate::layout::{default_page_config, export_session, ExportSummary};
use commands::{Commands, ConsoleArgs, GenerateArgs};

#[derive(Parser, Debug)]
#[command(name = "drillsheet")]
#[command(version, about = "Generate printable arithmetic worksheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self, config: &Config) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args, config),
            Commands::Console(args) => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                run_console(
                    args,
                    config,
                    &mut stdin.lock(),
                    &mut stdout.lock(),
                    std::thread::sleep,
                )
                .map(|_| ())
            }
        }
    }
}

fn build_generator(seed: Option<u64>, max_attempts: u32) -> OperandGenerator<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    OperandGenerator::new(rng, max_attempts)
}

fn run_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let operators = Operator::parse_list(&args.operators)?;
    let range = ValueRange::new(args.min, args.max)?;
    let session_config = SessionConfig::new(args.count, args.level)
        .with_operators(operators)
        .with_range(range);

    let mut generator = build_generator(args.seed.or(config.seed), config.max_attempts);
    let session = Session::new(session_config, &mut generator)
        .context("Failed to generate exercises")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.operations())?);
    } else {
        println!("{session}");
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    let summary = export(&session, &output, config)?;

    // Keep stdout pure JSON when asked for it.
    if args.json {
        eprintln!("{}", summary_line(&summary));
    } else {
        println!("{}", summary_line(&summary));
    }
    Ok(())
}

/// Console mode: level and count from `input`, all four operators, range `[1, 10]`.
///
/// With a countdown the exercises are shown as prompts, `tick` is called once per
/// second, then the answers follow.
pub fn run_console<R, W, T>(
    args: ConsoleArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
    mut tick: T,
) -> Result<ExportSummary>
where
    R: BufRead,
    W: Write,
    T: FnMut(Duration),
{
    let level: u8 = ask(input, out, "Level of operations? ")?
        .parse()
        .context("Level must be a whole number between 1 and 4")?;
    let count: usize = ask(input, out, "Number of operations desired? ")?
        .parse()
        .context("Number of operations must be a positive whole number")?;

    let mut generator = build_generator(config.seed, config.max_attempts);
    let session = Session::new(SessionConfig::new(count, level), &mut generator)
        .context("Failed to generate exercises")?;

    match args.countdown {
        Some(seconds) => {
            for (i, operation) in session.operations().iter().enumerate() {
                writeln!(out, "{:>3}. {}", i + 1, operation.prompt())?;
            }
            for remaining in (1..=seconds).rev() {
                write!(out, "{remaining}\r")?;
                out.flush()?;
                tick(Duration::from_secs(1));
            }
            writeln!(out, "Time's up!")?;
            writeln!(out, "{session}")?;
        }
        None => writeln!(out, "{session}")?,
    }

    let summary = export(&session, Path::new(&config.output_path), config)?;
    writeln!(out, "{}", summary_line(&summary))?;
    Ok(summary)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("Unexpected end of input while waiting for: {}", prompt.trim());
    }
    Ok(line.trim().to_string())
}

fn export(session: &Session, path: &Path, config: &Config) -> Result<ExportSummary> {
    info!(path = %path.display(), "Exporting worksheet");
    export_session(session, path, &default_page_config(config.app_name.as_str()))
        .map_err(|e| {
            warn!(code = e.code(), error = %e, "Worksheet export failed");
            e
        })
        .with_context(|| format!("Failed to write worksheet to {}", path.display()))
}

fn summary_line(summary: &ExportSummary) -> String {
    format!(
        "Wrote {} exercises on {} page(s) to {}",
        summary.exercises,
        summary.pages,
        summary.path.display()
    )
}
