//! Solver dispatch.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use aoc_core::{Answer, InputError, Observable, open_lines};
use cycle_machine::{MachineConfig, Scanout, Screen, SignalProbe, capture, decode};
use packet_marker::{MESSAGE_WINDOW, PACKET_WINDOW, marker_in_line};

/// One solver, selected by day and part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    /// Day 0: largest calorie group.
    Calories,
    /// Day 5 part 0: start-of-packet marker.
    PacketMarker,
    /// Day 5 part 1: start-of-message marker.
    MessageMarker,
    /// Day 9 part 0: signal strength.
    Signal,
    /// Day 9 part 1: CRT image.
    Crt,
}

impl Puzzle {
    #[must_use]
    pub fn select(day: u8, part: u8) -> Option<Self> {
        match (day, part) {
            (0, 0) => Some(Self::Calories),
            (5, 0) => Some(Self::PacketMarker),
            (5, 1) => Some(Self::MessageMarker),
            (9, 0) => Some(Self::Signal),
            (9, 1) => Some(Self::Crt),
            _ => None,
        }
    }

    /// Whether the solver runs the cycle machine.
    #[must_use]
    pub fn is_machine(self) -> bool {
        matches!(self, Self::Signal | Self::Crt)
    }
}

/// Output options that reach into a solver.
#[derive(Debug)]
pub struct Extras<'a> {
    pub screenshot: Option<&'a Path>,
    pub scale: u32,
    pub dump_state: bool,
}

/// A solver's answer plus its human-readable rendering.
#[derive(Debug)]
pub struct Solved {
    pub answer: Answer,
    pub text: String,
}

/// Run a puzzle over the input file.
pub fn solve(puzzle: Puzzle, input: &Path, extras: &Extras<'_>) -> Result<Solved> {
    let lines = open_lines(input)?;
    match puzzle {
        Puzzle::Calories => {
            let best = calorie_count::max_calories(lines)?
                .with_context(|| format!("{} holds no inventory", input.display()))?;
            Ok(Solved {
                answer: Answer::Number(i64::try_from(best.calories)?),
                text: format!("best elf: {}, max calories: {}", best.elf, best.calories),
            })
        }
        Puzzle::PacketMarker => markers(lines, PACKET_WINDOW, "SoP"),
        Puzzle::MessageMarker => markers(lines, MESSAGE_WINDOW, "Message"),
        Puzzle::Signal => {
            let probe = SignalProbe::new(&MachineConfig::default()).run(decode(lines))?;
            if extras.dump_state {
                dump_state(&probe);
            }
            Ok(Solved {
                answer: Answer::Number(probe.signal_sum()),
                text: format!("Signal Strength: {}", probe.signal_sum()),
            })
        }
        Puzzle::Crt => {
            let config = MachineConfig::default();
            let mut scanout = Scanout::new(decode(lines), &config);
            let screen = Screen::collect(&mut scanout, &config)?;
            if extras.dump_state {
                dump_state(scanout.crt());
            }
            if let Some(path) = extras.screenshot {
                capture::save_screenshot(&screen, path, extras.scale)
                    .map_err(|e| anyhow::anyhow!("{e}"))
                    .with_context(|| format!("saving screenshot to {}", path.display()))?;
                eprintln!("Screenshot saved to {}", path.display());
            }
            let answer = Answer::Lines(screen.into_rows());
            Ok(Solved {
                text: answer.to_string(),
                answer,
            })
        }
    }
}

fn markers<I>(lines: I, window: usize, kind: &str) -> Result<Solved>
where
    I: IntoIterator<Item = Result<String, InputError>>,
{
    let mut found = Vec::new();
    let mut text = String::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(n) = marker_in_line(&line, window) {
            if !text.is_empty() {
                text.push('\n');
            }
            write!(text, "Characters before {kind} Marker: {n}")?;
            found.push(i64::try_from(n)?);
        }
    }
    Ok(Solved {
        answer: Answer::Numbers(found),
        text,
    })
}

fn dump_state(machine: &impl Observable) {
    for path in machine.query_paths() {
        if let Some(value) = machine.query(path) {
            eprintln!("{path:>12} = {value}");
        }
    }
}
