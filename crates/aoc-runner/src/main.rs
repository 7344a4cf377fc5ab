//! Puzzle solver binary.
//!
//! `aoc <DAY> <PART> <INPUT>` runs one solver over one input file and
//! prints its answer. Input that cannot be opened or read is fatal.

mod puzzle;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use aoc_core::Report;
use clap::{ArgAction, Parser};

use crate::puzzle::{Extras, Puzzle, solve};

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "aoc", version, about = "Run one puzzle solver over an input file")]
struct Cli {
    /// Puzzle day: 0 (calories), 5 (markers) or 9 (cycle machine)
    day: u8,
    /// Puzzle part: 0 or 1
    part: u8,
    /// Puzzle input, one record per line
    input: PathBuf,
    /// Print the answer as a JSON object
    #[arg(long)]
    json: bool,
    /// Save the rendered CRT as a PNG (day 9 part 1)
    #[arg(long, value_name = "PNG")]
    screenshot: Option<PathBuf>,
    /// Device pixels per CRT pixel in screenshots
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,
    /// Print the machine's final state to stderr (day 9)
    #[arg(long)]
    dump_state: bool,
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn run(cli: &Cli) -> Result<()> {
    let Some(puzzle) = Puzzle::select(cli.day, cli.part) else {
        bail!("no solver for day {} part {}", cli.day, cli.part);
    };
    if cli.screenshot.is_some() && puzzle != Puzzle::Crt {
        bail!("--screenshot only applies to day 9 part 1");
    }
    if cli.dump_state && !puzzle.is_machine() {
        bail!("--dump-state only applies to day 9");
    }
    log::debug!("day {} part {}: {puzzle:?}", cli.day, cli.part);

    let extras = Extras {
        screenshot: cli.screenshot.as_deref(),
        scale: cli.scale,
        dump_state: cli.dump_state,
    };
    let solved = solve(puzzle, &cli.input, &extras)
        .with_context(|| format!("day {} part {}", cli.day, cli.part))?;

    let mut out = io::stdout().lock();
    if cli.json {
        let report = Report {
            day: cli.day,
            part: cli.part,
            answer: solved.answer,
        };
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    } else if !solved.text.is_empty() {
        writeln!(out, "{}", solved.text)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
